//! Sobel edge detection.
//!
//! Unlike a luminance-based Sobel, every channel is processed on its own, so
//! colored edges stay colored. Neighbors outside the image count as zero,
//! which means a flat image still shows a bright frame along its border.

use ndarray::{Array3, ArrayView3};

use super::core::{fill_rows, kernel_sum, round_to_u8, EdgeMode, Kernel3};
use crate::raster::CHANNELS;

/// Horizontal gradient kernel.
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical gradient kernel.
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Apply Sobel edge detection per channel.
///
/// Each channel becomes `round(sqrt(Gx^2 + Gy^2))`, saturated at 255.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
/// * `parallel` - Split rows across the rayon pool
///
/// # Returns
/// Gradient magnitude image with same dimensions
pub fn sobel_rgb(input: ArrayView3<u8>, parallel: bool) -> Array3<u8> {
    let (height, width, _) = input.dim();

    fill_rows(height, width, parallel, |y, mut row| {
        for x in 0..width {
            for c in 0..CHANNELS {
                let gx = kernel_sum(&input, y, x, c, &SOBEL_X, EdgeMode::Zero);
                let gy = kernel_sum(&input, y, x, c, &SOBEL_Y, EdgeMode::Zero);
                row[[x, c]] = gradient_magnitude(gx, gy);
            }
        }
    })
}

#[inline]
fn gradient_magnitude(gx: i32, gy: i32) -> u8 {
    let (gx, gy) = (gx as f64, gy as f64);
    round_to_u8((gx * gx + gy * gy).sqrt())
}
