//! In-memory time series container with parallel timestamp/value storage.

use crate::error::TransformError;
use serde::Serialize;

/// An ordered, mutable time series of `(timestamp, value)` pairs.
///
/// Timestamps (milliseconds since epoch) and values are stored in two parallel
/// vectors; the container maintains the invariant that both are always equal
/// length, so `timestamps()[i]` pairs with `values()[i]`.
///
/// Transformations replace the content of a series wholesale via
/// [`clear`](Self::clear) followed by [`add_all`](Self::add_all).
///
/// The container serializes but does not deserialize directly; rebuild one
/// with [`from_parts`](Self::from_parts) so the length invariant is checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Creates an empty time series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty time series with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            timestamps: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Builds a series from pre-paired timestamp and value vectors.
    ///
    /// Fails with [`TransformError::InvalidArgument`] if the vectors differ in
    /// length.
    pub fn from_parts(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self, TransformError> {
        if timestamps.len() != values.len() {
            return Err(TransformError::InvalidArgument(format!(
                "timestamps and values must be equal length, got {} and {}",
                timestamps.len(),
                values.len()
            )));
        }
        Ok(Self { timestamps, values })
    }

    /// Appends a single `(timestamp, value)` pair.
    pub fn push(&mut self, timestamp: i64, value: f64) {
        self.timestamps.push(timestamp);
        self.values.push(value);
    }

    /// Bulk-appends index-aligned timestamp and value slices.
    ///
    /// Fails with [`TransformError::InvalidArgument`] if the slices differ in
    /// length; the series is left unchanged in that case.
    pub fn add_all(&mut self, timestamps: &[i64], values: &[f64]) -> Result<(), TransformError> {
        if timestamps.len() != values.len() {
            return Err(TransformError::InvalidArgument(format!(
                "timestamps and values must be equal length, got {} and {}",
                timestamps.len(),
                values.len()
            )));
        }
        self.timestamps.extend_from_slice(timestamps);
        self.values.extend_from_slice(values);
        Ok(())
    }

    /// Removes all points, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.timestamps.clear();
        self.values.clear();
    }

    /// Returns the number of points in the series.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the series contains no points.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the timestamps as a slice, index-aligned with [`values`](Self::values).
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the values as a slice, index-aligned with [`timestamps`](Self::timestamps).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the `(timestamp, value)` pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

impl FromIterator<(i64, f64)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (timestamp, value) in iter {
            series.push(timestamp, value);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_accessors() {
        let mut series = TimeSeries::new();
        assert!(series.is_empty());

        series.push(100, 1.5);
        series.push(200, 2.5);

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps(), &[100, 200]);
        assert_eq!(series.values(), &[1.5, 2.5]);
    }

    #[test]
    fn test_add_all() {
        let mut series = TimeSeries::new();
        series.push(100, 1.0);

        series.add_all(&[200, 300], &[2.0, 3.0]).unwrap();

        assert_eq!(series.timestamps(), &[100, 200, 300]);
        assert_eq!(series.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_all_length_mismatch() {
        let mut series = TimeSeries::new();
        series.push(100, 1.0);

        let result = series.add_all(&[200, 300], &[2.0]);
        assert!(result.is_err());

        // A failed bulk append leaves the series unchanged
        assert_eq!(series.len(), 1);
        assert_eq!(series.timestamps(), &[100]);
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        assert!(TimeSeries::from_parts(vec![1, 2], vec![1.0]).is_err());

        let series = TimeSeries::from_parts(vec![1, 2], vec![1.0, 2.0]).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut series: TimeSeries = [(1, 10.0), (2, 20.0)].into_iter().collect();
        series.clear();
        assert!(series.is_empty());
    }

    #[test]
    fn test_points_iterator() {
        let series: TimeSeries = [(1, 10.0), (2, 20.0), (3, 30.0)].into_iter().collect();
        let points: Vec<(i64, f64)> = series.points().collect();
        assert_eq!(points, vec![(1, 10.0), (2, 20.0), (3, 30.0)]);
    }
}
