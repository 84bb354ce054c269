//! Horizontal mirroring.
//!
//! Each row is reversed left-to-right: `(y, x) -> (y, W - 1 - x)`. The middle
//! column of an odd-width image stays where it is.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

/// Mirror an image left-right into a new array.
///
/// # Arguments
/// * `image` - Input image (H, W, 3)
///
/// # Returns
/// Mirrored image (H, W, 3) - same dimensions
pub fn reflect_rgb(image: ArrayView3<u8>) -> Array3<u8> {
    let mut result = image.to_owned();
    reflect_in_place(result.view_mut());
    result
}

/// Mirror an image left-right in place by swapping pixel pairs.
pub fn reflect_in_place(mut image: ArrayViewMut3<u8>) {
    let (h, w, c) = image.dim();

    for y in 0..h {
        for x in 0..w / 2 {
            let mirror_x = w - 1 - x;
            for ch in 0..c {
                image.swap([y, x, ch], [y, mirror_x, ch]);
            }
        }
    }
}
