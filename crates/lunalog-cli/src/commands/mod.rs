pub mod calendar;
pub mod config;
pub mod history;
pub mod import;
pub mod period;
pub mod status;

/// Parse a `YYYY-MM-DD` argument. Date validation happens here, at the
/// boundary; the core engine assumes valid dates.
pub fn parse_date(raw: &str) -> Result<chrono::NaiveDate, Box<dyn std::error::Error>> {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{raw}': {e}").into())
}
