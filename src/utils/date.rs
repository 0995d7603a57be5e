use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse "YYYY-MM" into (year, zero-based month index).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let padded = format!("{}-01", s);
    let first = NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
    Ok((first.year(), first.month0()))
}

pub fn parse_optional_date(input: Option<&str>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        Ok(Some(parse_date(s)?))
    } else {
        Ok(None)
    }
}
