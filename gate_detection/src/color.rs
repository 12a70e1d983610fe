/// An RGBA sample with 8-bit channels.
/// Note: alpha is carried along but never takes part in the distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default)]
    pub a: u8,
}
impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Euclidean distance over red, green and blue
    pub fn distance(&self, other: &Color) -> f64 {
        #[inline(always)]
        fn squared(c1: u8, c2: u8) -> i32 {
            let d = c1 as i32 - c2 as i32;
            d * d
        }
        let sum = squared(self.r, other.r) + squared(self.g, other.g) + squared(self.b, other.b);
        (sum as f64).sqrt()
    }
}
impl From<image::Rgb<u8>> for Color {
    fn from(value: image::Rgb<u8>) -> Self {
        let [r, g, b] = value.0;
        Self { r, g, b, a: 255 }
    }
}
impl From<image::Rgba<u8>> for Color {
    fn from(value: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = value.0;
        Self { r, g, b, a }
    }
}
