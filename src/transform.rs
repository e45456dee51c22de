//! Top/Bottom transformations and the transformation trait.
//!
//! A transformation is a small immutable descriptor (kind + configuration)
//! that rewrites a [`TimeSeries`] in place. Descriptors carry value equality
//! and hashing so pipeline frameworks can deduplicate and cache repeated
//! configurations cheaply.

use crate::error::TransformError;
use crate::select::{SelectionMode, select};
use crate::series::TimeSeries;
use serde::{Deserialize, Serialize};

/// Type tag identifying a transformation kind to the pipeline framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransformKind {
    /// Keep the N largest values.
    Top,
    /// Keep the N smallest values.
    Bottom,
}

impl TransformKind {
    /// Returns the lowercase name used for display and serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transformation that rewrites a time series in place.
///
/// Implementations are stateless value types: one descriptor is constructed
/// per pipeline configuration and reused across many series.
pub trait Transformation {
    /// Applies the transformation, replacing the series' content.
    ///
    /// On error the series is left untouched.
    fn apply(&self, series: &mut TimeSeries) -> Result<(), TransformError>;

    /// Returns the type tag for this transformation kind.
    fn kind(&self) -> TransformKind;

    /// Returns the `"key=value"` argument strings describing this
    /// configuration, deterministic for identical configuration.
    fn arguments(&self) -> Vec<String>;
}

/// Keeps the `count` points with the largest values, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Top {
    count: usize,
}

impl Top {
    /// Creates a top transformation keeping the `count` largest values.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Returns the configured number of points to keep.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Transformation for Top {
    fn apply(&self, series: &mut TimeSeries) -> Result<(), TransformError> {
        replace_with_selection(series, SelectionMode::Largest, self.count)
    }

    fn kind(&self) -> TransformKind {
        TransformKind::Top
    }

    fn arguments(&self) -> Vec<String> {
        vec![format!("value={}", self.count)]
    }
}

/// Keeps the `count` points with the smallest values, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bottom {
    count: usize,
}

impl Bottom {
    /// Creates a bottom transformation keeping the `count` smallest values.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Returns the configured number of points to keep.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Transformation for Bottom {
    fn apply(&self, series: &mut TimeSeries) -> Result<(), TransformError> {
        replace_with_selection(series, SelectionMode::Smallest, self.count)
    }

    fn kind(&self) -> TransformKind {
        TransformKind::Bottom
    }

    fn arguments(&self) -> Vec<String> {
        vec![format!("value={}", self.count)]
    }
}

/// Selects from the series and replaces its content with the selection.
fn replace_with_selection(
    series: &mut TimeSeries,
    mode: SelectionMode,
    count: usize,
) -> Result<(), TransformError> {
    let result = select(mode, count, series.timestamps(), series.values())?;

    #[cfg(feature = "logging")]
    log::debug!(
        "{:?} selection: keeping {} of {} points",
        mode,
        result.len(),
        series.len()
    );

    let (timestamps, values) = result.into_parts();
    series.clear();
    series.add_all(&timestamps, &values)
}
