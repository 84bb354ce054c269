//! Grayscale conversion filter.
//!
//! Uses the plain channel average, not a luminosity weighting: each pixel
//! becomes `round((R + G + B) / 3)` in all three channels.

use ndarray::{Array3, ArrayView3};

/// Convert an RGB image to grayscale by averaging the channels.
///
/// # Arguments
/// * `input` - 3D array view of shape (height, width, 3)
///
/// # Returns
/// New array with R=G=B=average for every pixel
pub fn grayscale_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f64;
            let g = input[[y, x, 1]] as f64;
            let b = input[[y, x, 2]] as f64;

            // Average of three u8 values is always in range
            let avg = ((r + g + b) / 3.0).round() as u8;

            output[[y, x, 0]] = avg;
            output[[y, x, 1]] = avg;
            output[[y, x, 2]] = avg;
        }
    }

    output
}
