//! The cleaning pipeline itself.
//!
//! [`basic_cleaning`] wires the parser, transforms, and tracker together into
//! the single fetch → clean → publish pass this step performs.

pub mod basic_cleaning;

pub use basic_cleaning::{clean_listings, run, BasicCleaningJob, CleaningConfig};
