use crate::{Color, Error};

pub const DEFAULT_WIDTH: usize = 1280;
pub const DEFAULT_HEIGHT: usize = 540;
pub const DEFAULT_REFERENCE_COLOR: Color = Color::new(97, 76, 121, 0);

/// How the neighborhood pass reads the mask while counting neighbors
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelaxationOrder {
    /// Counts see pixels admitted earlier in the same raster sweep
    #[default]
    InPlace,
    /// Counts only see the result of the color filtering step
    Snapshot,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    /// Every pixel is compared against this color
    pub reference_color: Color,
    /// Maximal distance to the reference color for a direct hit
    pub step1_max_color_distance: f64,
    /// The neighborhood pass starts this far below the direct threshold
    pub step2_threshold_reduction: f64,
    /// Added to the neighborhood threshold per detected cell in the 3x3 window
    pub step2_neighbor_bonus: f64,
    pub step2_order: RelaxationOrder,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            reference_color: DEFAULT_REFERENCE_COLOR,
            step1_max_color_distance: 25.,
            step2_threshold_reduction: 10.,
            step2_neighbor_bonus: 2.,
            step2_order: RelaxationOrder::InPlace,
        }
    }
}
impl Settings {
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "dimensions must not be zero, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, value) in [
            ("step1_max_color_distance", self.step1_max_color_distance),
            ("step2_threshold_reduction", self.step2_threshold_reduction),
            ("step2_neighbor_bonus", self.step2_neighbor_bonus),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidSettings(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Neighborhood threshold for a 3x3 window holding `count` detected cells
    #[inline(always)]
    pub fn step2_threshold(&self, count: usize) -> f64 {
        self.step1_max_color_distance - self.step2_threshold_reduction
            + count as f64 * self.step2_neighbor_bonus
    }
}
