//! Pixel and raster types.
//!
//! A [`Raster`] wraps an `Array3<u8>` of shape `(height, width, 3)` with
//! channels in R, G, B order. The only ways to build one are the validating
//! constructors below, so every raster a filter sees is non-empty,
//! rectangular and three-channel.

use ndarray::{Array3, ArrayView3, ArrayViewMut3};

use crate::errors::FilterError;

/// Number of channels in every raster.
pub const CHANNELS: usize = 3;

/// One RGB pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { r, g, b }
    }

    /// Same value in all three channels.
    pub const fn gray(v: u8) -> Pixel {
        Pixel { r: v, g: v, b: v }
    }

    pub fn channels(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(rgb: [u8; 3]) -> Self {
        Pixel::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Pixel::new(r, g, b)
    }
}

/// Rectangular RGB image, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    data: Array3<u8>,
}

impl Raster {
    /// Create a raster where every pixel is `fill`.
    pub fn new(height: usize, width: usize, fill: Pixel) -> Result<Raster, FilterError> {
        element_count(height, width)?;

        let data = Array3::from_shape_fn((height, width, CHANNELS), |(_, _, c)| {
            fill.channels()[c]
        });

        Ok(Raster { data })
    }

    /// Build a raster from a row-major grid of pixels.
    ///
    /// Every row must have the same length as the first one.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Raster, FilterError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = element_count(height, width)?;

        let mut flat = Vec::with_capacity(len);
        for (row, pixels) in rows.iter().enumerate() {
            if pixels.len() != width {
                return Err(FilterError::JaggedRows {
                    row,
                    expected: width,
                    found: pixels.len(),
                });
            }
            for px in pixels {
                flat.extend_from_slice(&px.channels());
            }
        }

        Raster::from_shape_vec(height, width, flat)
    }

    /// Build a raster from interleaved RGB bytes (length `height * width * 3`).
    pub fn from_shape_vec(
        height: usize,
        width: usize,
        data: Vec<u8>,
    ) -> Result<Raster, FilterError> {
        let expected = element_count(height, width)?;
        let found = data.len();
        if found != expected {
            return Err(FilterError::BufferLength { expected, found });
        }

        let data = Array3::from_shape_vec((height, width, CHANNELS), data)
            .map_err(|_| FilterError::BufferLength { expected, found })?;

        Ok(Raster { data })
    }

    /// Take ownership of an existing `(height, width, 3)` array.
    pub fn from_array(data: Array3<u8>) -> Result<Raster, FilterError> {
        check_shape(data.view())?;
        Ok(Raster { data })
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like ndarray indexing.
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        Pixel::new(
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        )
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, px: Pixel) {
        self.data[[row, col, 0]] = px.r;
        self.data[[row, col, 1]] = px.g;
        self.data[[row, col, 2]] = px.b;
    }

    /// Iterate rows top to bottom, each as a `Vec<Pixel>`.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Pixel>> + '_ {
        (0..self.height()).map(move |y| (0..self.width()).map(|x| self.pixel(y, x)).collect())
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Mutable access to the channels. The shape cannot be changed through it.
    pub fn view_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        self.data.view_mut()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Interleaved RGB bytes, row-major.
    pub fn into_raw_vec(self) -> Vec<u8> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec_and_offset().0
        } else {
            self.data.iter().copied().collect()
        }
    }

    /// Swap the pixel data for a filter result of the same shape.
    pub(crate) fn replace(&mut self, data: Array3<u8>) {
        debug_assert_eq!(data.dim(), self.data.dim());
        self.data = data;
    }
}

/// Number of bytes a `(height, width, 3)` raster holds.
///
/// Fails on a zero dimension, and on sizes ndarray cannot address
/// (more than `isize::MAX` elements).
fn element_count(height: usize, width: usize) -> Result<usize, FilterError> {
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyRaster { height, width });
    }
    height
        .checked_mul(width)
        .and_then(|n| n.checked_mul(CHANNELS))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(FilterError::DimensionsTooLarge { height, width })
}

/// Validate an array before it is handed to a filter.
pub fn check_shape(data: ArrayView3<u8>) -> Result<(), FilterError> {
    let (height, width, channels) = data.dim();
    element_count(height, width)?;
    if channels != CHANNELS {
        return Err(FilterError::ChannelCount(channels));
    }
    Ok(())
}
