use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type Price = f64;

/// Share count, kept as a float to match the exchange files.
pub type Volume = f64;

/// One symbol's end-of-day summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EodRecord {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Volume,
}

/// Canonical trading day. `NaiveDate` has no time-of-day or zone, so this is the normalized form.
pub fn day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
