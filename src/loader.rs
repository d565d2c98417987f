use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use chrono::{Datelike, NaiveDate};
use eyre::WrapErr;
use tracing::{debug, info, warn};

use crate::{
    config::ExchangeConfig,
    error::EodError,
    model::EodRecord,
    parser::{parse_row, parse_rows, validate_header},
};

/// One batch per requested date, in request order. Any failure fails the whole request.
pub trait EodParser {
    fn parse(&self, dates: &[NaiveDate]) -> eyre::Result<Vec<Vec<EodRecord>>>;
}

/// Reads `<data_dir>/<exchange>_<YYYYMMDD>.csv` files in the
/// `Symbol,Date,Open,High,Low,Close,Volume` layout.
#[derive(Debug, Clone)]
pub struct ExchangeCsvParser {
    config: ExchangeConfig,
}

impl EodParser for ExchangeCsvParser {
    fn parse(&self, dates: &[NaiveDate]) -> eyre::Result<Vec<Vec<EodRecord>>> {
        let batches = dates
            .iter()
            .map(|date| self.parse_file(*date))
            .collect::<eyre::Result<Vec<_>>>()?;

        info!(
            exchange = %self.config.exchange,
            dates = dates.len(),
            records = batches.iter().map(Vec::len).sum::<usize>(),
            "parsed EOD request"
        );

        Ok(batches)
    }
}

impl ExchangeCsvParser {
    pub fn new(data_dir: impl Into<PathBuf>, exchange: impl Into<String>) -> Self {
        Self::from_config(ExchangeConfig::new(data_dir, exchange))
    }

    pub fn from_config(config: ExchangeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    pub fn file_path(&self, date: NaiveDate) -> PathBuf {
        file_path(&self.config.data_dir, &self.config.exchange, date)
    }

    pub fn parse_file(&self, date: NaiveDate) -> eyre::Result<Vec<EodRecord>> {
        let path = self.file_path(date);

        let records = load_lines(&path)
            .map_err(eyre::Report::from)
            .and_then(|lines| parse_file_contents(&lines))
            .map_err(|err| {
                warn!(path = %path.display(), %date, error = %err, "cannot parse EOD file");
                err
            })
            .wrap_err_with(|| format!("EOD file for {date} ({})", path.display()))?;

        debug!(path = %path.display(), records = records.len(), "parsed EOD file");

        Ok(records)
    }
}

/// `<data_dir>/<exchange>_<YYYYMMDD>.csv`. No validation of either input.
pub fn file_path(data_dir: impl AsRef<Path>, exchange: &str, date: NaiveDate) -> PathBuf {
    data_dir.as_ref().join(format!(
        "{exchange}_{:04}{:02}{:02}.csv",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Whole file as lines without terminators. The handle is closed on every return.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>, EodError> {
    let path = path.as_ref();
    let load_err = |source| EodError::Load {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(load_err)?;
    let reader = BufReader::new(file);

    reader.lines().collect::<Result<Vec<_>, _>>().map_err(load_err)
}

pub fn parse_file_contents<S: AsRef<str>>(lines: &[S]) -> eyre::Result<Vec<EodRecord>> {
    parse_rows(validate_header(lines)?, parse_row)
}
