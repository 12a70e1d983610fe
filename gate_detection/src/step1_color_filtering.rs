use crate::{Color, Mask, PixelGrid};

/// Marks every pixel within `step1_max_color_distance` of the reference color
pub fn color_filtering(image: &PixelGrid<Color>, settings: &crate::Settings) -> Mask {
    let reference = &settings.reference_color;
    image.map(|p| p.distance(reference) <= settings.step1_max_color_distance)
}
