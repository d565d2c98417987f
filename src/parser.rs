use chrono::NaiveDate;
use eyre::WrapErr;
use itertools::Itertools;

use crate::{
    error::EodError,
    model::{EodRecord, Price, Volume},
};

pub const HEADER: &str = "Symbol,Date,Open,High,Low,Close,Volume";

const FIELD_COUNT: usize = 7;
const DATE_FORMAT: &str = "%d-%b-%Y";
const PRICE_COLUMNS: [&str; 4] = ["open", "high", "low", "close"];

pub type HeaderParser = fn(&str) -> Result<(), EodError>;
pub type RowParser = fn(&str) -> Result<EodRecord, EodError>;

/// Converts data lines in order. The first bad line fails the whole batch.
pub fn parse_rows<S: AsRef<str>>(rows: &[S], row: RowParser) -> eyre::Result<Vec<EodRecord>> {
    let mut records = Vec::with_capacity(rows.len());

    for (ix, line) in rows.iter().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let record = row(line.as_ref()).wrap_err_with(|| format!("line {}", ix + 2))?;
        records.push(record);
    }

    Ok(records)
}

/// Strips the standard header line and returns the data lines.
pub fn validate_header<S: AsRef<str>>(lines: &[S]) -> Result<&[S], EodError> {
    strip_header(lines, parse_header)
}

fn strip_header<S: AsRef<str>>(lines: &[S], header: HeaderParser) -> Result<&[S], EodError> {
    let (first, rows) = lines.split_first().ok_or(EodError::MissingHeader)?;
    header(first.as_ref())?;

    if rows.is_empty() {
        return Err(EodError::NoRecords);
    }

    Ok(rows)
}

pub fn parse_header(line: &str) -> Result<(), EodError> {
    if line != HEADER {
        return Err(EodError::MissingHeader);
    }

    Ok(())
}

pub fn parse_row(line: &str) -> Result<EodRecord, EodError> {
    let splits = line.split(',').collect_vec();

    if splits.len() != FIELD_COUNT {
        return Err(EodError::FieldCount {
            found: splits.len(),
        });
    }

    let date = parse_date(splits[1])?;
    let [open, high, low, close] = parse_prices(&splits[2..6])?;
    let volume = splits[6]
        .parse::<Volume>()
        .map_err(|source| EodError::InvalidVolume {
            field: splits[6].to_owned(),
            source,
        })?;

    Ok(EodRecord {
        symbol: splits[0].to_owned(),
        date,
        open,
        high,
        low,
        close,
        volume,
    })
}

/// Parses `DD-Mon-YYYY`, e.g. `30-May-2023`.
pub fn parse_date(field: &str) -> Result<NaiveDate, EodError> {
    let invalid = || EodError::InvalidDate {
        field: field.to_owned(),
    };
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match field.split('-').collect_tuple::<(&str, &str, &str)>() {
        Some((d, m, y))
            if d.len() == 2 && m.len() == 3 && y.len() == 4 && is_digits(d) && is_digits(y) =>
        {
            NaiveDate::parse_from_str(field, DATE_FORMAT).map_err(|_| invalid())
        }
        _ => Err(invalid()),
    }
}

/// Open, high, low, close in that order.
pub fn parse_prices(fields: &[&str]) -> Result<[Price; 4], EodError> {
    if fields.len() != PRICE_COLUMNS.len() {
        return Err(EodError::FieldCount {
            found: fields.len(),
        });
    }

    let mut prices = [Price::default(); 4];

    for ((price, field), column) in prices.iter_mut().zip(fields).zip(PRICE_COLUMNS) {
        *price = field.parse::<Price>().map_err(|source| EodError::InvalidPrice {
            column,
            field: (*field).to_owned(),
            source,
        })?;
    }

    Ok(prices)
}
