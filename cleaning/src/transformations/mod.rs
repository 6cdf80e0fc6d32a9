//! Row filters and column transforms for the cleaning step.
//!
//! # Modules
//!
//! - [`filtering`]: Drop price outliers and rows outside the NYC bounding box
//! - [`cleaning`]: Coerce the `last_review` column to a proper date type
//!
//! # Example
//!
//! ```no_run
//! use nyc_listings_clean::transformations::{filter_price_range, filter_nyc_bounds};
//! use polars::prelude::*;
//!
//! # fn example(df: DataFrame) -> PolarsResult<()> {
//! let df = filter_price_range(&df, 10.0, 350.0)?;
//! let df = filter_nyc_bounds(&df)?;
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod filtering;

pub use cleaning::coerce_date_column;
pub use filtering::{filter_nyc_bounds, filter_price_range};
