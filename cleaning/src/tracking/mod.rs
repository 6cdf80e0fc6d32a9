//! Run and artifact tracking.
//!
//! The cleaning step never talks to a tracker global; it receives an
//! implementation of [`RunTracker`] and associates every fetched and published
//! file with a [`RunHandle`] for lineage.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for tracker operations
//! - [`tracker`]: The `RunTracker` trait and its handle/metadata types
//! - [`local`]: Filesystem-backed implementation
//!
//! # Example
//!
//! ```no_run
//! use nyc_listings_clean::tracking::{LocalTracker, RunTracker};
//!
//! let tracker = LocalTracker::open("artifact_store").unwrap();
//! let run = tracker
//!     .begin_run("basic_cleaning", serde_json::json!({"min_price": 10.0}))
//!     .unwrap();
//! let input = tracker.fetch_artifact(&run, "sample.csv:latest").unwrap();
//! ```

pub mod error;
pub mod local;
pub mod tracker;

pub use error::{TrackerError, TrackerResult};
pub use local::LocalTracker;
pub use tracker::{ArtifactSpec, RunHandle, RunTracker};
