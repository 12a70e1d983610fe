use itertools::Itertools;

use crate::{Color, Mask, PixelGrid, RelaxationOrder, Settings};

/// Grows the mask into pixels whose color is close enough given how many cells
/// of their 3x3 window are already detected.
/// Only interior pixels are visited, in ascending row-major order. The mask is
/// only ever switched from `false` to `true`.
/// Returns the number of newly detected pixels.
pub fn relaxation(image: &PixelGrid<Color>, mask: &mut Mask, settings: &Settings) -> usize {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    let snapshot = match settings.step2_order {
        RelaxationOrder::InPlace => None,
        RelaxationOrder::Snapshot => Some(mask.clone()),
    };
    let reference = &settings.reference_color;
    let mut admitted = 0;
    for (row, column) in interior(mask.width(), mask.height()) {
        if mask[(row, column)] {
            continue;
        }
        // in place: cells admitted earlier in this sweep are counted as well
        let count = window_count(snapshot.as_ref().unwrap_or(&*mask), row, column);
        if image[(row, column)].distance(reference) <= settings.step2_threshold(count) {
            mask[(row, column)] = true;
            admitted += 1;
        }
    }
    log::debug!(
        "Neighborhood relaxation ({:?}) admitted {admitted} pixels",
        settings.step2_order
    );
    admitted
}

/// Positions with a complete 3x3 window, in raster order
fn interior(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = 1..height.saturating_sub(1);
    let columns = 1..width.saturating_sub(1);
    rows.cartesian_product(columns)
}

/// Detected cells in the 3x3 window centered on (row, column), center included
#[inline(always)]
fn window_count(mask: &Mask, row: usize, column: usize) -> usize {
    (row - 1..=row + 1)
        .cartesian_product(column - 1..=column + 1)
        .filter(|&position| mask[position])
        .count()
}
