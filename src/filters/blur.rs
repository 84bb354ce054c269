//! Box blur filter.
//!
//! Every output pixel is the mean of the in-bounds pixels of the 3x3 window
//! around it. Border pixels average over fewer samples (6 on an edge, 4 in
//! a corner) instead of padding, so a uniform image stays uniform.

use ndarray::{Array3, ArrayView3};

use super::core::{fill_rows, in_bounds, round_to_u8};
use crate::raster::CHANNELS;

/// Apply a 3x3 box blur.
///
/// Reads only from `input`, so no output pixel sees another pixel's blurred
/// value.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
/// * `parallel` - Split rows across the rayon pool
///
/// # Returns
/// Blurred image with same dimensions
pub fn box_blur_rgb(input: ArrayView3<u8>, parallel: bool) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let r = 1isize;

    fill_rows(height, width, parallel, |y, mut row| {
        for x in 0..width {
            let mut sum = [0u32; CHANNELS];
            let mut count = 0u32;

            for dy in -r..=r {
                for dx in -r..=r {
                    let Some((sy, sx)) = in_bounds(height, width, y, x, dy, dx) else {
                        continue;
                    };

                    for (c, total) in sum.iter_mut().enumerate() {
                        *total += input[[sy, sx, c]] as u32;
                    }
                    count += 1;
                }
            }

            for (c, &total) in sum.iter().enumerate() {
                row[[x, c]] = round_to_u8(total as f64 / count as f64);
            }
        }
    })
}
