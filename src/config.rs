//! Filter selection and engine options.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::FilterError;

/// The fixed set of filters the engine can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterKind {
    Grayscale,
    Reflect,
    Blur,
    Edges,
    Sepia,
    Negative,
    Sharpen,
    Emboss,
}

impl FilterKind {
    /// All filters, in the order a filter bar lists them.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Grayscale,
        FilterKind::Reflect,
        FilterKind::Blur,
        FilterKind::Edges,
        FilterKind::Sepia,
        FilterKind::Negative,
        FilterKind::Sharpen,
        FilterKind::Emboss,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "Grayscale",
            FilterKind::Reflect => "Reflect",
            FilterKind::Blur => "Blur",
            FilterKind::Edges => "Edges",
            FilterKind::Sepia => "Sepia",
            FilterKind::Negative => "Negative",
            FilterKind::Sharpen => "Sharpen",
            FilterKind::Emboss => "Emboss",
        }
    }

    /// True for filters whose output pixel reads a 3x3 window of the input.
    pub const fn is_neighborhood(self) -> bool {
        matches!(
            self,
            FilterKind::Blur | FilterKind::Edges | FilterKind::Sharpen | FilterKind::Emboss
        )
    }
}

impl Display for FilterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    /// Case-insensitive match on the filter name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FilterKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FilterError::UnknownFilter(s.to_string()))
    }
}

/// Options controlling how the engine executes filters.
///
/// These never change the output, only how the work is scheduled.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineOptions {
    /// Split neighborhood filters across the rayon thread pool.
    pub parallel: bool,
    /// Rasters with fewer pixels than this always run on the calling thread.
    pub min_parallel_pixels: usize,
}

impl EngineOptions {
    /// Options that never leave the calling thread.
    pub fn sequential() -> EngineOptions {
        EngineOptions {
            parallel: false,
            ..EngineOptions::default()
        }
    }

    /// Whether a raster of the given size should be split across threads.
    pub fn use_parallel(&self, height: usize, width: usize) -> bool {
        self.parallel && height > 1 && height.saturating_mul(width) >= self.min_parallel_pixels
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_pixels: 64 * 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for kind in FilterKind::ALL {
            assert_eq!(kind.to_string().parse::<FilterKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("edges".parse::<FilterKind>().unwrap(), FilterKind::Edges);
        assert_eq!(" SEPIA ".parse::<FilterKind>().unwrap(), FilterKind::Sepia);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Posterize".parse::<FilterKind>().unwrap_err();
        assert!(matches!(err, FilterError::UnknownFilter(name) if name == "Posterize"));
    }

    #[test]
    fn test_neighborhood_filters() {
        let neighborhood: Vec<FilterKind> = FilterKind::ALL
            .into_iter()
            .filter(|k| k.is_neighborhood())
            .collect();
        assert_eq!(
            neighborhood,
            vec![
                FilterKind::Blur,
                FilterKind::Edges,
                FilterKind::Sharpen,
                FilterKind::Emboss
            ]
        );
    }

    #[test]
    fn test_small_rasters_stay_sequential() {
        let options = EngineOptions::default();
        assert!(!options.use_parallel(8, 8));
        assert!(options.use_parallel(128, 128));
        assert!(!EngineOptions::sequential().use_parallel(1024, 1024));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_options_from_json() {
        let options: EngineOptions = serde_json::from_str(r#"{"parallel": false}"#).unwrap();
        assert!(!options.parallel);
        assert_eq!(options.min_parallel_pixels, 64 * 64);

        let kind: FilterKind = serde_json::from_str(r#""emboss""#).unwrap();
        assert_eq!(kind, FilterKind::Emboss);
    }
}
