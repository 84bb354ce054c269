//! Filter dispatch.
//!
//! [`FilterEngine`] maps a [`FilterKind`] onto its implementation with one
//! `match`. Every filter reads from the untouched input and produces a fresh
//! array; the in-place entry point swaps that array into the raster
//! afterwards, so no filter ever observes its own partial output.

use log::{debug, trace};
use ndarray::{Array3, ArrayView3};

use crate::config::{EngineOptions, FilterKind};
use crate::errors::FilterError;
use crate::filters::{blur, color_adjust, edge, grayscale, mirror, sharpen, stylize};
use crate::raster::{check_shape, Raster};

#[derive(Clone, Debug, Default)]
pub struct FilterEngine {
    options: EngineOptions,
}

impl FilterEngine {
    pub fn new(options: EngineOptions) -> FilterEngine {
        FilterEngine { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Run `kind` over `raster` and return the result as a new raster.
    pub fn apply(&self, kind: FilterKind, raster: &Raster) -> Raster {
        let mut output = raster.clone();
        self.apply_in_place(kind, &mut output);
        output
    }

    /// Run `kind` over `raster`, replacing its pixels with the result.
    pub fn apply_in_place(&self, kind: FilterKind, raster: &mut Raster) {
        if kind == FilterKind::Reflect {
            debug!("Applying {kind} in place to {}x{}", raster.height(), raster.width());
            mirror::reflect_in_place(raster.view_mut());
            return;
        }
        let output = self.run(kind, raster.view());
        raster.replace(output);
    }

    /// Run `kind` over a bare `(height, width, 3)` array.
    ///
    /// The array is checked first; a wrong shape is rejected without running
    /// the filter.
    pub fn apply_array(
        &self,
        kind: FilterKind,
        input: ArrayView3<u8>,
    ) -> Result<Array3<u8>, FilterError> {
        check_shape(input)?;
        Ok(self.run(kind, input))
    }

    fn run(&self, kind: FilterKind, input: ArrayView3<u8>) -> Array3<u8> {
        let (height, width, _) = input.dim();
        let parallel = kind.is_neighborhood() && self.options.use_parallel(height, width);

        debug!("Applying {kind} to {height}x{width}");
        trace!("{kind}: parallel={parallel}");

        match kind {
            FilterKind::Grayscale => grayscale::grayscale_rgb(input),
            FilterKind::Reflect => mirror::reflect_rgb(input),
            FilterKind::Blur => blur::box_blur_rgb(input, parallel),
            FilterKind::Edges => edge::sobel_rgb(input, parallel),
            FilterKind::Sepia => color_adjust::sepia_rgb(input),
            FilterKind::Negative => color_adjust::negative_rgb(input),
            FilterKind::Sharpen => sharpen::sharpen_rgb(input, parallel),
            FilterKind::Emboss => stylize::emboss_rgb(input, parallel),
        }
    }
}

/// Apply a filter with default engine options, returning a new raster.
pub fn apply(kind: FilterKind, raster: &Raster) -> Raster {
    FilterEngine::default().apply(kind, raster)
}

/// Apply a filter with default engine options, in place.
pub fn apply_in_place(kind: FilterKind, raster: &mut Raster) {
    FilterEngine::default().apply_in_place(kind, raster)
}
