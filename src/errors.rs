//! Errors returned when a raster or filter request is rejected.
//!
//! Filters themselves never fail. Every error here is a precondition
//! violation caught at the boundary, before any pixel is touched.

use std::fmt::{Debug, Display, Formatter};

pub enum FilterError {
    /// Height or width is zero.
    EmptyRaster { height: usize, width: usize },
    /// A row does not have as many pixels as the first row.
    JaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// `height * width * 3` does not fit in memory addressable by ndarray.
    DimensionsTooLarge { height: usize, width: usize },
    /// The pixel array does not have exactly three channels.
    ChannelCount(usize),
    /// Interleaved byte buffer length differs from `height * width * 3`.
    BufferLength { expected: usize, found: usize },
    /// A filter name that is not one of the eight known filters.
    UnknownFilter(String),
}

impl Debug for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRaster { height, width } => {
                write!(f, "Raster dimensions must be positive, got {height}x{width}")
            }
            Self::JaggedRows { row, expected, found } => {
                write!(
                    f,
                    "Row {row} has {found} pixels, expected {expected} (raster must be rectangular)"
                )
            }
            Self::DimensionsTooLarge { height, width } => {
                write!(f, "Raster dimensions {height}x{width} are too large")
            }
            Self::ChannelCount(channels) => {
                write!(f, "Expected 3 channels (RGB), got {channels}")
            }
            Self::BufferLength { expected, found } => {
                write!(f, "Pixel buffer has {found} bytes, expected {expected}")
            }
            Self::UnknownFilter(name) => write!(f, "Unknown filter {name:?}"),
        }
    }
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = FilterError::JaggedRows { row: 2, expected: 4, found: 3 };
        assert_eq!(
            err.to_string(),
            "Row 2 has 3 pixels, expected 4 (raster must be rectangular)"
        );

        let err = FilterError::DimensionsTooLarge { height: 9, width: 4 };
        assert_eq!(err.to_string(), "Raster dimensions 9x4 are too large");

        let err = FilterError::UnknownFilter("Posterize".to_string());
        assert_eq!(err.to_string(), "Unknown filter \"Posterize\"");
    }
}
