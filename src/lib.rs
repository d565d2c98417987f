//! Daily end-of-day price files published by an exchange, parsed into typed records.
//!
//! ```no_run
//! use eod_parser::{day, EodParser, ExchangeCsvParser};
//!
//! let parser = ExchangeCsvParser::new("/data", "NASDAQ");
//! let batches = parser.parse(&[day(2023, 7, 3).unwrap(), day(2023, 7, 5).unwrap()])?;
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;

pub use config::ExchangeConfig;
pub use error::EodError;
pub use loader::{EodParser, ExchangeCsvParser};
pub use model::{day, EodRecord, Price, Volume};
