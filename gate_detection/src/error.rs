use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open image '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot decode image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Cannot encode image '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image is {width}x{height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Cannot parse settings: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    StdIO(#[from] std::io::Error),
}
impl Error {
    /// The input could not be turned into a pixel grid
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::Open { .. } | Self::Decode { .. } | Self::DimensionMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
