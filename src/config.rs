use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::WrapErr;
use serde::{Deserialize, Serialize};

/// Where an exchange publishes its daily files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeConfig {
    pub data_dir: PathBuf,
    pub exchange: String,
}

impl ExchangeConfig {
    pub fn new(data_dir: impl Into<PathBuf>, exchange: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            exchange: exchange.into(),
        }
    }

    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("cannot read config {}", path.display()))?;

        Self::from_json_str(&json).wrap_err_with(|| format!("invalid config {}", path.display()))
    }
}
