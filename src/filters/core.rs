//! Core utilities shared by the filters:
//! - Rounding and clamping into the u8 channel range
//! - 3x3 kernel convolution with a selectable border policy
//! - Row-parallel output construction

use ndarray::{Array3, ArrayView3, ArrayViewMut2};
use rayon::prelude::*;

use crate::raster::CHANNELS;

/// 3x3 integer kernel, indexed `[ky][kx]` with `[1][1]` at the center.
pub type Kernel3 = [[i32; 3]; 3];

/// How neighbors outside the raster are treated during convolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeMode {
    /// Out-of-bounds neighbors contribute zero.
    Zero,
    /// Out-of-bounds neighbors take the value of the nearest in-bounds pixel.
    Replicate,
}

/// Round half away from zero and saturate into `0..=255`.
#[inline]
pub fn round_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Coordinates of the neighbor at offset `(dy, dx)` from `(y, x)`, or `None`
/// when it lies outside a `height` x `width` raster.
#[inline]
pub fn in_bounds(
    height: usize,
    width: usize,
    y: usize,
    x: usize,
    dy: isize,
    dx: isize,
) -> Option<(usize, usize)> {
    let sy = y.checked_add_signed(dy).filter(|&sy| sy < height)?;
    let sx = x.checked_add_signed(dx).filter(|&sx| sx < width)?;
    Some((sy, sx))
}

/// Read channel `c` of the neighbor at offset `(dy, dx)` from `(y, x)`.
///
/// Returns `None` when the neighbor lies outside the raster.
#[inline]
pub fn neighbor(
    input: &ArrayView3<u8>,
    y: usize,
    x: usize,
    dy: isize,
    dx: isize,
    c: usize,
) -> Option<u8> {
    let (height, width, _) = input.dim();
    let (sy, sx) = in_bounds(height, width, y, x, dy, dx)?;
    Some(input[[sy, sx, c]])
}

/// Weighted 3x3 sum of channel `c` around `(y, x)`.
pub fn kernel_sum(
    input: &ArrayView3<u8>,
    y: usize,
    x: usize,
    c: usize,
    kernel: &Kernel3,
    mode: EdgeMode,
) -> i32 {
    let (height, width, _) = input.dim();
    let mut sum = 0i32;

    for (ky, kernel_row) in kernel.iter().enumerate() {
        for (kx, &weight) in kernel_row.iter().enumerate() {
            if weight == 0 {
                continue;
            }
            let dy = ky as isize - 1;
            let dx = kx as isize - 1;

            let v = match mode {
                EdgeMode::Zero => neighbor(input, y, x, dy, dx, c).unwrap_or(0),
                EdgeMode::Replicate => {
                    let sy = (y as isize + dy).clamp(0, height as isize - 1) as usize;
                    let sx = (x as isize + dx).clamp(0, width as isize - 1) as usize;
                    input[[sy, sx, c]]
                }
            };
            sum += v as i32 * weight;
        }
    }

    sum
}

/// Apply a single 3x3 kernel to every channel, rounding and clamping the
/// result into range.
pub fn convolve3x3(
    input: ArrayView3<u8>,
    kernel: &Kernel3,
    mode: EdgeMode,
    parallel: bool,
) -> Array3<u8> {
    let (height, width, _) = input.dim();

    fill_rows(height, width, parallel, |y, mut row| {
        for x in 0..width {
            for c in 0..CHANNELS {
                let sum = kernel_sum(&input, y, x, c, kernel, mode);
                row[[x, c]] = sum.clamp(0, 255) as u8;
            }
        }
    })
}

/// Allocate a `(height, width, 3)` output and let `fill` write each row.
///
/// `fill` receives the row index and a `(width, 3)` view of that row. Rows
/// are independent, so with `parallel` set they are handed out across the
/// rayon pool; the result does not depend on the order they run in.
pub fn fill_rows<F>(height: usize, width: usize, parallel: bool, fill: F) -> Array3<u8>
where
    F: Fn(usize, ArrayViewMut2<u8>) + Sync,
{
    let mut output = Array3::<u8>::zeros((height, width, CHANNELS));

    if parallel {
        let rows: Vec<ArrayViewMut2<u8>> = output.outer_iter_mut().collect();
        rows.into_par_iter()
            .enumerate()
            .for_each(|(y, row)| fill(y, row));
    } else {
        for (y, row) in output.outer_iter_mut().enumerate() {
            fill(y, row);
        }
    }

    output
}
