//! Sharpen filter.
//!
//! A 3x3 Laplacian-style kernel that adds the difference between a pixel
//! and its four direct neighbors back onto the pixel:
//!
//! ```text
//!  0 -1  0
//! -1  5 -1
//!  0 -1  0
//! ```
//!
//! Border pixels replicate their nearest in-bounds neighbor, so flat regions
//! (including the image frame of a flat image) come out unchanged.

use ndarray::{Array3, ArrayView3};

use super::core::{convolve3x3, EdgeMode, Kernel3};

pub const SHARPEN_KERNEL: Kernel3 = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Apply the sharpen kernel to every channel.
///
/// # Arguments
/// * `input` - Image with shape (height, width, 3)
/// * `parallel` - Split rows across the rayon pool
///
/// # Returns
/// Sharpened image, clamped to 0-255
pub fn sharpen_rgb(input: ArrayView3<u8>, parallel: bool) -> Array3<u8> {
    convolve3x3(input, &SHARPEN_KERNEL, EdgeMode::Replicate, parallel)
}
