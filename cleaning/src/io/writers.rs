use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Write a DataFrame to CSV with a header row and no index column.
///
/// Column order is preserved; Date columns render as `%Y-%m-%d`.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .context("Failed to serialize DataFrame to CSV")?;

    Ok(())
}
