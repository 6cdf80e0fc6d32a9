use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Columns the cleaning step depends on.
pub const REQUIRED_COLUMNS: [&str; 4] = ["price", "last_review", "longitude", "latitude"];

/// Parse a listings CSV file into a Polars DataFrame
pub fn parse_listings_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV at {}", csv_path.display()))?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            bail!("Missing required column: {}", required);
        }
    }

    let mut lazy_df = df.lazy();

    // Numeric columns that should be Float64 (may be inferred as i64 if no decimal point)
    for col_name in ["price", "longitude", "latitude"] {
        lazy_df = lazy_df.with_column(
            when(col(col_name).is_not_null())
                .then(col(col_name).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(col_name),
        );
    }

    // last_review stays text until the date-coercion stage
    lazy_df = lazy_df.with_column(col("last_review").cast(DataType::String));

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}
