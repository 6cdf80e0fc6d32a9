//! Parsers for listings data formats.
//!
//! # Parsers
//!
//! - [`csv_parser`]: Parse CSV-formatted listings files into DataFrames

pub mod csv_parser;


pub use csv_parser::{parse_listings_csv, REQUIRED_COLUMNS};
