//! Stylize filters: Emboss.
//!
//! Directional emboss with the light coming from the top left:
//!
//! ```text
//! -2 -1  0
//! -1  1  1
//!  0  1  2
//! ```
//!
//! The weights sum to 1, so flat areas keep their color and no mid-gray bias
//! is added. Borders replicate the nearest in-bounds pixel, same as sharpen.

use ndarray::{Array3, ArrayView3};

use super::core::{convolve3x3, EdgeMode, Kernel3};

pub const EMBOSS_KERNEL: Kernel3 = [[-2, -1, 0], [-1, 1, 1], [0, 1, 2]];

/// Apply emboss effect to every channel.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
/// * `parallel` - Split rows across the rayon pool
///
/// # Returns
/// Embossed image, clamped to 0-255
pub fn emboss_rgb(input: ArrayView3<u8>, parallel: bool) -> Array3<u8> {
    convolve3x3(input, &EMBOSS_KERNEL, EdgeMode::Replicate, parallel)
}
