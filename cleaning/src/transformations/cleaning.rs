use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Formats accepted when coercing a review date.
const DATE_FORMATS: [&str; 4] = [
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y",
];

fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if format.contains("%H") {
            if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(parsed.date());
            }
        } else if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    None
}

/// Rewrite a string column as a Date column, keeping its position in the schema.
///
/// Parsing is permissive: values that fail every accepted format become null
/// rather than an error, and no row is dropped. This mirrors the lenient
/// behavior the downstream pipeline expects.
pub fn coerce_date_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let strings = df
        .column(column)?
        .cast(&DataType::String)
        .with_context(|| format!("Column {} cannot be read as text", column))?;
    let values = strings.str()?;

    // Date columns are physically days since the Unix epoch
    let epoch = NaiveDate::default();
    let days: Int32Chunked = values
        .into_iter()
        .map(|value| {
            value
                .and_then(parse_review_date)
                .map(|date| date.signed_duration_since(epoch).num_days() as i32)
        })
        .collect();

    let dates = days.with_name(PlSmallStr::from(column)).into_date();

    let mut out = df.clone();
    out.with_column(dates.into_series())
        .with_context(|| format!("Failed to replace column {}", column))?;
    Ok(out)
}
