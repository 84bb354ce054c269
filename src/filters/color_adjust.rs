//! Color adjustment filters: Negative, Sepia.
//!
//! Both are pixel-wise: every output pixel depends only on the input pixel
//! at the same position.

use ndarray::{Array3, ArrayView3};

use super::core::round_to_u8;

// ============================================================================
// Negative
// ============================================================================

/// Invert image colors.
///
/// Each channel becomes `255 - channel`. Exact integer arithmetic, so
/// applying it twice returns the original image.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
///
/// # Returns
/// Color-inverted image
pub fn negative_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    input.mapv(|v| 255 - v)
}

// ============================================================================
// Sepia
// ============================================================================

// Sepia color matrix, one row per output channel
const SEPIA_R: [f64; 3] = [0.393, 0.769, 0.189];
const SEPIA_G: [f64; 3] = [0.349, 0.686, 0.168];
const SEPIA_B: [f64; 3] = [0.272, 0.534, 0.131];

/// Apply the full-strength sepia tone matrix.
///
/// All three outputs are computed from the original pixel before any
/// channel is written. Results above 255 saturate.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
///
/// # Returns
/// Sepia-toned image
pub fn sepia_rgb(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let rgb = [
                input[[y, x, 0]] as f64,
                input[[y, x, 1]] as f64,
                input[[y, x, 2]] as f64,
            ];

            output[[y, x, 0]] = round_to_u8(dot(&SEPIA_R, &rgb));
            output[[y, x, 1]] = round_to_u8(dot(&SEPIA_G, &rgb));
            output[[y, x, 2]] = round_to_u8(dot(&SEPIA_B, &rgb));
        }
    }
    output
}

#[inline]
fn dot(weights: &[f64; 3], rgb: &[f64; 3]) -> f64 {
    weights[0] * rgb[0] + weights[1] * rgb[1] + weights[2] * rgb[2]
}
