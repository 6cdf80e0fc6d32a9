//! Output serialization utilities.

pub mod writers;


pub use writers::write_csv;
