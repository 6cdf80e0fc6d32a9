//! CLI entry point for the basic cleaning step.
//!
//! Fetches the input artifact, cleans it, and publishes the result. The
//! artifact store root comes from the `ARTIFACT_STORE` environment variable
//! (default `artifact_store`).

use anyhow::Result;
use clap::Parser;

use nyc_listings_clean::pipeline::basic_cleaning::{self, BasicCleaningJob};
use nyc_listings_clean::tracking::LocalTracker;

#[derive(Parser, Debug)]
#[command(author, version, about = "This step cleans the data")]
struct Args {
    /// Name of the input artifact to fetch
    #[arg(long = "input_artifact")]
    input_artifact: String,

    /// Name to publish the cleaned dataset under
    #[arg(long = "output_artifact")]
    output_artifact: String,

    /// Category tag for the published dataset
    #[arg(long = "output_type")]
    output_type: String,

    /// Free-text description for the published dataset
    #[arg(long = "output_description")]
    output_description: String,

    /// Lower inclusive price bound
    #[arg(long = "min_price")]
    min_price: f64,

    /// Upper inclusive price bound
    #[arg(long = "max_price")]
    max_price: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let store_root =
        std::env::var("ARTIFACT_STORE").unwrap_or_else(|_| "artifact_store".to_string());
    let tracker = LocalTracker::open(store_root)?;

    let job = BasicCleaningJob {
        input_artifact: args.input_artifact,
        output_artifact: args.output_artifact,
        output_type: args.output_type,
        output_description: args.output_description,
        min_price: args.min_price,
        max_price: args.max_price,
    };

    basic_cleaning::run(&tracker, &job)
}
