//! # tempora
//!
//! In-memory time-series transformations.
//!
//! This crate provides the Top/Bottom transformation core for pluggable
//! time-series pipelines: given a series of `(timestamp, value)` pairs, keep
//! the N pairs with the largest (or smallest) values and replace the series'
//! content with exactly those pairs, in chronological order.
//!
//! ## Features
//!
//! - **Pure selector**: [`select`] ranks parallel timestamp/value arrays
//!   without mutating them
//! - **Stable tie-break**: pairs tied at the cutoff value are kept
//!   earliest-first
//! - **Value-typed descriptors**: [`Top`] and [`Bottom`] carry value
//!   equality and hashing for pipeline deduplication
//! - **In-place apply**: transformations rewrite a [`TimeSeries`] via
//!   clear-then-bulk-append
//!
//! ## Quick Start
//!
//! ```rust
//! use tempora::{TimeSeries, Top, Transformation};
//!
//! # fn main() -> Result<(), tempora::TransformError> {
//! let mut series: TimeSeries = [(1, 3.0), (2, 9.0), (3, 1.0), (4, 7.0)]
//!     .into_iter()
//!     .collect();
//!
//! // Keep the two largest values, preserving chronological order
//! Top::new(2).apply(&mut series)?;
//!
//! assert_eq!(series.timestamps(), &[2, 4]);
//! assert_eq!(series.values(), &[9.0, 7.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! This crate does **not** implement the surrounding pipeline (transformation
//! registration, query parsing, storage). It is the in-memory transformation
//! core; the pipeline framework drives it through the [`Transformation`]
//! trait.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod select;
pub mod series;
pub mod transform;

pub use error::TransformError;
pub use select::{SelectionMode, SelectionResult, select};
pub use series::TimeSeries;
pub use transform::{Bottom, Top, TransformKind, Transformation};
