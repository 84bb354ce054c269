//! rgbfilter
//!
//! Per-pixel and 3x3 neighborhood filters for in-memory RGB rasters, with
//! optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! A raster is an `ndarray::Array3<u8>` of shape `(height, width, 3)`, row 0
//! at the top, channels in R, G, B order. Alpha and other channel counts are
//! rejected at the boundary.
//!
//! ## Filters
//! Grayscale, Reflect, Blur, Edges, Sepia, Negative, Sharpen and Emboss,
//! selected through [`FilterKind`]. No filter changes the raster dimensions.
//!
//! ```
//! use rgbfilter::{apply, FilterKind, Pixel, Raster};
//!
//! let raster = Raster::from_rows(vec![vec![
//!     Pixel::gray(0),
//!     Pixel::gray(100),
//!     Pixel::gray(200),
//! ]])
//! .unwrap();
//!
//! let mirrored = apply(FilterKind::Reflect, &raster);
//! assert_eq!(mirrored.pixel(0, 0), Pixel::gray(200));
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub(crate) mod filters;
pub mod raster;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{EngineOptions, FilterKind};
pub use engine::{apply, apply_in_place, FilterEngine};
pub use errors::FilterError;
pub use raster::{Pixel, Raster};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::config::FilterKind;
    use crate::engine::FilterEngine;
    use crate::errors::FilterError;

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn run<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        kind: FilterKind,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = FilterEngine::default().apply_array(kind, image.as_array())?;
        Ok(result.into_pyarray(py))
    }

    /// Apply a filter selected by name ("Grayscale", "Blur", ...).
    ///
    /// Names are case-insensitive. Raises ValueError for unknown names and
    /// for images that are not (height, width, 3) u8 arrays.
    #[pyfunction]
    pub fn apply_filter<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        name: &str,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let kind: FilterKind = name.parse()?;
        run(py, image, kind)
    }

    /// Names of all available filters.
    #[pyfunction]
    pub fn filter_names() -> Vec<&'static str> {
        FilterKind::ALL.iter().map(|k| k.name()).collect()
    }

    // ========================================================================
    // One function per filter
    // ========================================================================

    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Grayscale)
    }

    #[pyfunction]
    pub fn reflect<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Reflect)
    }

    #[pyfunction]
    pub fn blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Blur)
    }

    #[pyfunction]
    pub fn edges<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Edges)
    }

    #[pyfunction]
    pub fn sepia<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Sepia)
    }

    #[pyfunction]
    pub fn negative<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Negative)
    }

    #[pyfunction]
    pub fn sharpen<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Sharpen)
    }

    #[pyfunction]
    pub fn emboss<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        run(py, image, FilterKind::Emboss)
    }

    #[pymodule]
    pub fn rgbfilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(apply_filter, m)?)?;
        m.add_function(wrap_pyfunction!(filter_names, m)?)?;

        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(reflect, m)?)?;
        m.add_function(wrap_pyfunction!(blur, m)?)?;
        m.add_function(wrap_pyfunction!(edges, m)?)?;
        m.add_function(wrap_pyfunction!(sepia, m)?)?;
        m.add_function(wrap_pyfunction!(negative, m)?)?;
        m.add_function(wrap_pyfunction!(sharpen, m)?)?;
        m.add_function(wrap_pyfunction!(emboss, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rgbfilter;
