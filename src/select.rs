//! N-element selection over parallel timestamp/value arrays.
//!
//! This is the pure core of the Top/Bottom transformations: given parallel
//! arrays, pick the N pairs with the largest or smallest values and return
//! them in chronological order.

use crate::error::TransformError;
use serde::{Deserialize, Serialize};

/// Whether selection retains the largest or smallest values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Keep the N largest values.
    Largest,
    /// Keep the N smallest values.
    Smallest,
}

/// The selected subset of a series: index-aligned timestamps and values.
///
/// Produced by [`select`] and consumed within a single transformation apply;
/// `timestamps()[i]` pairs with `values()[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl SelectionResult {
    /// Returns the number of selected points.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the selected timestamps in chronological order.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the selected values, index-aligned with the timestamps.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the result, returning the `(timestamps, values)` vectors.
    pub fn into_parts(self) -> (Vec<i64>, Vec<f64>) {
        (self.timestamps, self.values)
    }
}

/// Selects the `n` pairs with the largest or smallest values.
///
/// The output is ordered chronologically (by original index), not by rank:
/// the result answers "which N points are the N largest/smallest", preserved
/// in time sequence. When several pairs tie at the cutoff value, the
/// earliest-occurring pairs are kept first.
///
/// If `n >= timestamps.len()` the entire input is returned unchanged. The
/// inputs are never mutated, and every returned pair is an exact copy of an
/// input pair.
///
/// Values are ordered with [`f64::total_cmp`], so selection is deterministic
/// even in the presence of NaN.
///
/// # Errors
///
/// Fails with [`TransformError::InvalidArgument`] if `timestamps` and `values`
/// differ in length.
pub fn select(
    mode: SelectionMode,
    n: usize,
    timestamps: &[i64],
    values: &[f64],
) -> Result<SelectionResult, TransformError> {
    if timestamps.len() != values.len() {
        return Err(TransformError::InvalidArgument(format!(
            "timestamps and values must be equal length, got {} and {}",
            timestamps.len(),
            values.len()
        )));
    }

    if n >= timestamps.len() {
        return Ok(SelectionResult {
            timestamps: timestamps.to_vec(),
            values: values.to_vec(),
        });
    }

    // Stable sort by value keeps tied pairs in original order, so truncation
    // retains the earliest-occurring pairs at the cutoff boundary.
    let mut order: Vec<usize> = (0..timestamps.len()).collect();
    match mode {
        SelectionMode::Largest => order.sort_by(|&a, &b| values[b].total_cmp(&values[a])),
        SelectionMode::Smallest => order.sort_by(|&a, &b| values[a].total_cmp(&values[b])),
    }
    order.truncate(n);

    // Back to chronological order for the output.
    order.sort_unstable();

    Ok(SelectionResult {
        timestamps: order.iter().map(|&i| timestamps[i]).collect(),
        values: order.iter().map(|&i| values[i]).collect(),
    })
}
