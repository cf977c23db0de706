use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

use crate::entities::{DateString, DATE_FORMAT};

pub fn to_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .context(format!("error on parsing date from {}", date_str))
}

pub fn to_date_string(date: NaiveDate) -> DateString {
    date.format(DATE_FORMAT).to_string()
}

pub fn tomorrow(today: NaiveDate) -> DateString {
    to_date_string(today + Duration::days(1))
}
