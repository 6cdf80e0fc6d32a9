//! Basic cleaning step for the NYC short-term-rental listings pipeline.
//!
//! Fetches a raw listings artifact from a run tracker, removes price and
//! geographic outliers, coerces `last_review` to a date column, and publishes
//! the cleaned CSV as a new versioned artifact.

pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod tracking;
pub mod transformations;
