//! Filter implementations.
//!
//! ## Format
//!
//! | Shape | Type | Description |
//! |-------|------|-------------|
//! | (H, W, 3) | u8 | Red, green, blue, 0-255 |
//!
//! Only [`crate::engine`] calls into this module, after the shape has been
//! checked by [`crate::raster`]. The functions here index channels 0..3
//! directly.
//!
//! ## Filter Categories
//!
//! - **Pixel-wise**: grayscale, negative, sepia
//! - **Geometric**: reflect
//! - **Neighborhood (3x3)**: box blur, sobel, sharpen, emboss. These read a
//!   read-only view of the input and write a separate output buffer, and can
//!   split rows across rayon workers.

pub mod core;
pub mod grayscale;
pub mod color_adjust;
pub mod mirror;
pub mod blur;
pub mod edge;
pub mod sharpen;
pub mod stylize;
