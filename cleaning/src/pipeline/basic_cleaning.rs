use anyhow::{Context, Result};
use log::info;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::writers;
use crate::parsing::csv_parser;
use crate::tracking::{ArtifactSpec, RunTracker};
use crate::transformations::{cleaning, filtering};

/// Filename of the locally staged output before publication.
pub const OUTPUT_FILENAME: &str = "clean_sample.csv";

/// Price bounds applied by the outlier filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CleaningConfig {
    pub min_price: f64,
    pub max_price: f64,
}

/// Full parameter set for one cleaning job.
///
/// Serialized as the run's configuration so the tracker records exactly what
/// produced the output artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicCleaningJob {
    pub input_artifact: String,
    pub output_artifact: String,
    pub output_type: String,
    pub output_description: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl BasicCleaningJob {
    pub fn config(&self) -> CleaningConfig {
        CleaningConfig {
            min_price: self.min_price,
            max_price: self.max_price,
        }
    }
}

/// Apply the cleaning stages in order: price filter, date fix, NYC bounds filter.
///
/// The filters are independent, but the order is kept stable so the log output
/// of a run reads the same from one execution to the next.
pub fn clean_listings(df: &DataFrame, config: &CleaningConfig) -> Result<DataFrame> {
    let df = filtering::filter_price_range(df, config.min_price, config.max_price)
        .context("Failed to filter price outliers")?;
    info!("Removing outliers");

    let df = cleaning::coerce_date_column(&df, "last_review")
        .context("Failed to fix last_review column type")?;
    info!("Fixing column data types");

    let df = filtering::filter_nyc_bounds(&df).context("Failed to filter by NYC bounds")?;
    info!("Removed data outside of NYC");

    Ok(df)
}

/// Run the full cleaning step against a tracker.
///
/// The staged local file is removed only after a successful publish; a publish
/// failure leaves it on disk.
pub fn run<T: RunTracker>(tracker: &T, job: &BasicCleaningJob) -> Result<()> {
    let run = tracker
        .begin_run("basic_cleaning", serde_json::to_value(job)?)
        .context("Failed to begin tracked run")?;

    let input_path = tracker
        .fetch_artifact(&run, &job.input_artifact)
        .with_context(|| format!("Failed to fetch input artifact '{}'", job.input_artifact))?;

    let df = csv_parser::parse_listings_csv(&input_path)?;
    let mut cleaned = clean_listings(&df, &job.config())?;

    let output_path = Path::new(OUTPUT_FILENAME);
    writers::write_csv(&mut cleaned, output_path)?;

    info!("Logging artifact");
    let spec = ArtifactSpec {
        name: job.output_artifact.clone(),
        kind: job.output_type.clone(),
        description: job.output_description.clone(),
    };
    tracker
        .publish_artifact(&run, &spec, output_path)
        .with_context(|| format!("Failed to publish artifact '{}'", job.output_artifact))?;

    std::fs::remove_file(output_path).context("Failed to remove local output file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::LocalTracker;
    use tempfile::tempdir;

    fn sample_frame() -> DataFrame {
        df!(
            "id" => [1i64, 2, 3],
            "price" => [50.0, 5000.0, 80.0],
            "longitude" => [-73.9, -73.9, -80.0],
            "latitude" => [40.7, 40.7, 40.7],
            "last_review" => ["2019-01-01", "2019-01-01", "bad-date"],
        )
        .unwrap()
    }

    fn bounds(min_price: f64, max_price: f64) -> CleaningConfig {
        CleaningConfig {
            min_price,
            max_price,
        }
    }

    #[test]
    fn test_clean_listings_concrete_scenario() {
        let df = sample_frame();
        let out = clean_listings(&df, &bounds(10.0, 1000.0)).unwrap();

        // Row 2 dropped for price, row 3 for longitude; row 1 survives with a
        // parsed review date
        assert_eq!(out.height(), 1);
        let review = out
            .column("last_review")
            .unwrap()
            .cast(&DataType::String)
            .unwrap();
        assert_eq!(review.str().unwrap().get(0), Some("2019-01-01"));
        assert_eq!(out.column("last_review").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_clean_listings_preserves_column_set() {
        let df = sample_frame();
        let out = clean_listings(&df, &bounds(10.0, 1000.0)).unwrap();

        let before: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        let after: Vec<String> = out.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clean_listings_inverted_bounds_empty_not_error() {
        let df = sample_frame();
        let out = clean_listings(&df, &bounds(1000.0, 10.0)).unwrap();
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn test_clean_listings_idempotent() {
        let df = sample_frame();
        let config = bounds(10.0, 1000.0);

        let once = clean_listings(&df, &config).unwrap();
        let twice = clean_listings(&once, &config).unwrap();

        assert!(once.equals_missing(&twice));
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempdir().unwrap();
        let tracker = LocalTracker::open(dir.path().join("store")).unwrap();

        // Stage the raw dataset as an input artifact
        let raw = dir.path().join("sample.csv");
        std::fs::write(
            &raw,
            "id,price,longitude,latitude,last_review\n\
             1,50.0,-73.9,40.7,2019-01-01\n\
             2,5000.0,-73.9,40.7,2019-01-01\n\
             3,80.0,-80.0,40.7,bad-date\n",
        )
        .unwrap();
        let setup = tracker.begin_run("upload", serde_json::json!({})).unwrap();
        tracker
            .publish_artifact(
                &setup,
                &ArtifactSpec {
                    name: "sample.csv".to_string(),
                    kind: "raw_data".to_string(),
                    description: "raw listings".to_string(),
                },
                &raw,
            )
            .unwrap();

        let job = BasicCleaningJob {
            input_artifact: "sample.csv:latest".to_string(),
            output_artifact: "clean_sample.csv".to_string(),
            output_type: "clean_data".to_string(),
            output_description: "cleaned listings".to_string(),
            min_price: 10.0,
            max_price: 1000.0,
        };
        run(&tracker, &job).unwrap();

        // The staged local copy is gone after a successful publish
        assert!(!Path::new(OUTPUT_FILENAME).exists());

        let verify = tracker.begin_run("verify", serde_json::json!({})).unwrap();
        let published = tracker
            .fetch_artifact(&verify, "clean_sample.csv:latest")
            .unwrap();
        let content = std::fs::read_to_string(published).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("id,price,longitude,latitude,last_review"));
        assert_eq!(lines.next(), Some("1,50.0,-73.9,40.7,2019-01-01"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_run_fails_on_missing_input() {
        let dir = tempdir().unwrap();
        let tracker = LocalTracker::open(dir.path().join("store")).unwrap();

        let job = BasicCleaningJob {
            input_artifact: "nope.csv".to_string(),
            output_artifact: "clean_sample.csv".to_string(),
            output_type: "clean_data".to_string(),
            output_description: "cleaned listings".to_string(),
            min_price: 10.0,
            max_price: 1000.0,
        };

        assert!(run(&tracker, &job).is_err());
    }
}
