mod color;
pub use color::Color;

mod pixel_grid;
pub use pixel_grid::{Mask, PixelGrid};

mod settings;
pub use settings::{
    RelaxationOrder, Settings, DEFAULT_HEIGHT, DEFAULT_REFERENCE_COLOR, DEFAULT_WIDTH,
};

pub mod error;
pub use error::Error;

pub mod image_io;
pub use image_io::{FileSink, FileSource, ImageSink, ImageSource};

pub mod step1_color_filtering;
pub mod step2_relaxation;
pub mod step3_render;

pub const HIT: image::Luma<u8> = image::Luma([255]);
pub const MISSED: image::Luma<u8> = image::Luma([0]);

/// Result of both detection passes over one image
#[derive(Debug, Clone)]
pub struct GateDetection {
    step1_mask: Mask,
    mask: Mask,
    step2_admitted: usize,
}
impl GateDetection {
    /// Mask after the color filtering step only
    pub fn step1_mask(&self) -> &Mask {
        &self.step1_mask
    }
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
    pub fn into_mask(self) -> Mask {
        self.mask
    }
    pub fn step1_count(&self) -> usize {
        self.step1_mask.count()
    }
    /// Pixels added by the neighborhood pass
    pub fn step2_admitted(&self) -> usize {
        self.step2_admitted
    }
    pub fn detected_count(&self) -> usize {
        self.mask.count()
    }
    pub fn render(&self) -> image::RgbImage {
        step3_render::render(&self.mask)
    }
}

/// Detects all pixels belonging to the gate.
/// The neighborhood pass only starts once the color filtering is complete.
pub fn gate_detection(
    image: &PixelGrid<Color>,
    settings: &Settings,
) -> Result<GateDetection, Error> {
    settings.validate()?;
    let (width, height) = image.dimensions();
    if (width, height) != (settings.width, settings.height) {
        return Err(Error::DimensionMismatch {
            expected_width: settings.width,
            expected_height: settings.height,
            width,
            height,
        });
    }

    let step1_mask = step1_color_filtering::color_filtering(image, settings);
    log::debug!(
        "Color filtering detected {} of {} pixels",
        step1_mask.count(),
        width * height
    );

    let mut mask = step1_mask.clone();
    let step2_admitted = step2_relaxation::relaxation(image, &mut mask, settings);

    Ok(GateDetection {
        step1_mask,
        mask,
        step2_admitted,
    })
}

#[cfg(test)]
mod tests {
    use crate::{gate_detection, Color, Error, PixelGrid, Settings};

    #[test]
    fn reference_color_everywhere_renders_black() {
        let settings = Settings::default();
        let image = PixelGrid::new(settings.width, settings.height, settings.reference_color);
        let detection = gate_detection(&image, &settings).unwrap();
        assert_eq!(detection.step1_count(), 1280 * 540);
        assert_eq!(detection.step2_admitted(), 0);
        let rendered = detection.render();
        assert_eq!(rendered.dimensions(), (1280, 540));
        assert!(rendered.pixels().all(|p| *p == image::Rgb([0, 0, 0])));
    }

    #[test]
    fn just_above_threshold_renders_white() {
        let settings = Settings::default();
        let off_color = Color::new(123, 76, 121, 255);
        let image = PixelGrid::new(settings.width, settings.height, off_color);
        let detection = gate_detection(&image, &settings).unwrap();
        assert_eq!(detection.detected_count(), 0);
        assert!(detection
            .render()
            .pixels()
            .all(|p| *p == image::Rgb([255, 255, 255])));
    }

    /// A gate crossed by an off-color seam and framed by an off-color rim:
    /// seam pixels get admitted once enough of their window is detected, the rim
    /// never has enough detected neighbors
    #[test]
    fn gate_with_seam_and_rim() {
        let settings = Settings {
            width: 30,
            height: 20,
            ..Default::default()
        };
        let gate = Color::new(100, 70, 125, 255);
        let off_color = Color::new(97, 76, 147, 255); // distance 26
        let background = Color::new(20, 160, 40, 255);
        let inside =
            |row: usize, column: usize| (5..15).contains(&row) && (8..22).contains(&column);
        let framed =
            |row: usize, column: usize| (4..16).contains(&row) && (7..23).contains(&column);
        let image = PixelGrid::from_fn(30, 20, |row, column| {
            if inside(row, column) && row != 10 {
                gate
            } else if framed(row, column) {
                off_color
            } else {
                background
            }
        });
        let detection = gate_detection(&image, &settings).unwrap();
        assert_eq!(detection.step1_count(), 9 * 14);
        assert_eq!(detection.step2_admitted(), 12);
        assert_eq!(detection.detected_count(), 9 * 14 + 12);
        for ((row, column), &detected) in detection.mask().iter() {
            let expected = inside(row, column) && (row != 10 || (9..=20).contains(&column));
            assert_eq!(detected, expected, "({row}, {column})");
        }
    }

    #[test]
    fn refuses_grid_of_wrong_size() {
        let image = PixelGrid::new(10, 10, Color::default());
        let error = gate_detection(&image, &Settings::default()).unwrap_err();
        assert!(matches!(error, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn refuses_invalid_settings() {
        let settings = Settings {
            width: 3,
            height: 3,
            step2_neighbor_bonus: f64::NAN,
            ..Default::default()
        };
        let image = PixelGrid::new(3, 3, Color::default());
        let error = gate_detection(&image, &settings).unwrap_err();
        assert!(matches!(error, Error::InvalidSettings(_)));
    }
}
