use polars::prelude::*;

/// Bounding box used to drop listings located outside NYC.
///
/// Fixed policy for this dataset, not configurable.
pub const NYC_LONGITUDE_MIN: f64 = -74.25;
pub const NYC_LONGITUDE_MAX: f64 = -73.50;
pub const NYC_LATITUDE_MIN: f64 = 40.5;
pub const NYC_LATITUDE_MAX: f64 = 41.2;

/// Keep rows whose `price` lies in `[min_price, max_price]`, inclusive on both ends.
///
/// Null prices fail the predicate and are dropped. `min_price > max_price`
/// simply yields an empty frame.
pub fn filter_price_range(
    df: &DataFrame,
    min_price: f64,
    max_price: f64,
) -> PolarsResult<DataFrame> {
    let price = df.column("price")?.f64()?;

    let lower = price.gt_eq(min_price);
    let upper = price.lt_eq(max_price);

    let mask = &lower & &upper;
    df.filter(&mask)
}

/// Keep rows whose coordinates fall inside the NYC bounding box
pub fn filter_nyc_bounds(df: &DataFrame) -> PolarsResult<DataFrame> {
    let longitude = df.column("longitude")?.f64()?;
    let latitude = df.column("latitude")?.f64()?;

    let lon_lower = longitude.gt_eq(NYC_LONGITUDE_MIN);
    let lon_upper = longitude.lt_eq(NYC_LONGITUDE_MAX);
    let lat_lower = latitude.gt_eq(NYC_LATITUDE_MIN);
    let lat_upper = latitude.lt_eq(NYC_LATITUDE_MAX);

    let mask = &(&lon_lower & &lon_upper) & &(&lat_lower & &lat_upper);
    df.filter(&mask)
}
