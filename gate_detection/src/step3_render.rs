use crate::{Mask, HIT, MISSED};

pub const DETECTED: image::Rgb<u8> = image::Rgb([0, 0, 0]);
pub const BACKGROUND: image::Rgb<u8> = image::Rgb([255, 255, 255]);

/// Converts the mask into a black-white luma image (detected pixels are `HIT`)
pub fn mask_to_luma(mask: &Mask) -> image::GrayImage {
    image::GrayImage::from_fn(mask.width() as u32, mask.height() as u32, |x, y| {
        if mask[(y as usize, x as usize)] {
            HIT
        } else {
            MISSED
        }
    })
}

/// Detected pixels become black, everything else white
pub fn render(mask: &Mask) -> image::RgbImage {
    imageproc::map::map_colors(&mask_to_luma(mask), |p| {
        if p == HIT {
            DETECTED
        } else {
            BACKGROUND
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{mask_to_luma, render, BACKGROUND, DETECTED};
    use crate::{Mask, HIT, MISSED};

    #[test]
    fn render_maps_every_pixel() {
        let mut mask = Mask::new(6, 4, false);
        mask[(0, 5)] = true;
        mask[(3, 0)] = true;
        mask[(2, 2)] = true;
        let rendered = render(&mask);
        assert_eq!(rendered.dimensions(), (6, 4));
        for ((row, column), &detected) in mask.iter() {
            let expected = if detected { DETECTED } else { BACKGROUND };
            assert_eq!(rendered.get_pixel(column as u32, row as u32), &expected);
        }
    }

    #[test]
    fn render_uses_only_black_and_white() {
        let mask = Mask::from_fn(9, 7, |row, column| (row * column) % 4 == 1);
        let rendered = render(&mask);
        assert!(rendered
            .pixels()
            .all(|p| *p == image::Rgb([0, 0, 0]) || *p == image::Rgb([255, 255, 255])));
        let black = rendered.pixels().filter(|p| **p == DETECTED).count();
        assert_eq!(black, mask.count());
    }

    #[test]
    fn luma_is_not_transposed() {
        let mut mask = Mask::new(3, 2, false);
        mask[(1, 2)] = true;
        let luma = mask_to_luma(&mask);
        assert_eq!(luma.dimensions(), (3, 2));
        assert_eq!(luma.get_pixel(2, 1), &HIT);
        assert_eq!(luma.get_pixel(1, 1), &MISSED);
    }
}
