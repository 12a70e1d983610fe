use std::path::{Path, PathBuf};

use crate::{error::Result, Color, Error, Mask, PixelGrid, Settings};

/// Provides the color grid the detection runs on
pub trait ImageSource {
    fn load(&self, settings: &Settings) -> Result<PixelGrid<Color>>;
}

/// Persists rendered images
pub trait ImageSink {
    fn store(&self, image: &image::DynamicImage) -> Result<()>;

    /// Stores the mask rendered black (detected) on white
    fn store_mask(&self, mask: &Mask) -> Result<()> {
        self.store(&crate::step3_render::render(mask).into())
    }
}

/// Decodes an image file, the format is guessed from its content
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl ImageSource for FileSource {
    fn load(&self, settings: &Settings) -> Result<PixelGrid<Color>> {
        let open_error = |source: std::io::Error| Error::Open {
            path: self.path.clone(),
            source,
        };
        let image = image::ImageReader::open(&self.path)
            .map_err(open_error)?
            .with_guessed_format()
            .map_err(open_error)?
            .decode()
            .map_err(|source| Error::Decode {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "Decoded '{}' ({}x{}, {:?})",
            self.path.display(),
            image.width(),
            image.height(),
            image.color()
        );
        to_pixel_grid(&image, settings)
    }
}

/// Encodes into a file, the format follows the file extension
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}
impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
}
impl ImageSink for FileSink {
    fn store(&self, image: &image::DynamicImage) -> Result<()> {
        image.save(&self.path).map_err(|source| Error::Encode {
            path: self.path.clone(),
            source,
        })
    }
}

/// Copies a decoded image into a color grid of the configured size
pub fn to_pixel_grid(image: &image::DynamicImage, settings: &Settings) -> Result<PixelGrid<Color>> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    if (width, height) != (settings.width, settings.height) {
        return Err(Error::DimensionMismatch {
            expected_width: settings.width,
            expected_height: settings.height,
            width,
            height,
        });
    }
    #[inline(always)]
    fn grid_from<P: image::Pixel<Subpixel = u8>>(
        buffer: &image::ImageBuffer<P, Vec<u8>>,
        convert: impl Fn(P) -> Color,
    ) -> PixelGrid<Color> {
        PixelGrid::from_fn(
            buffer.width() as usize,
            buffer.height() as usize,
            |row, column| convert(*buffer.get_pixel(column as u32, row as u32)),
        )
    }
    let grid = match image {
        image::DynamicImage::ImageRgb8(buffer) => grid_from(buffer, Color::from),
        image::DynamicImage::ImageRgba8(buffer) => grid_from(buffer, Color::from),
        other => grid_from(&other.to_rgba8(), Color::from),
    };
    Ok(grid)
}
