use std::io;
use std::num::ParseFloatError;

use derive_more::{Display, Error};

use crate::parser::HEADER;

#[derive(Debug, Display, Error)]
pub enum EodError {
    #[display(fmt = "cannot load file {}", path)]
    Load { path: String, source: io::Error },

    #[display(fmt = "expected header `{}` as first line", HEADER)]
    MissingHeader,

    #[display(fmt = "no records to parse")]
    NoRecords,

    #[display(fmt = "expected record to have 7 fields, found {}", found)]
    FieldCount { found: usize },

    #[display(fmt = "invalid date `{}`, expected DD-Mon-YYYY", field)]
    InvalidDate { field: String },

    #[display(fmt = "invalid {} price `{}`", column, field)]
    InvalidPrice {
        column: &'static str,
        field: String,
        source: ParseFloatError,
    },

    #[display(fmt = "invalid volume `{}`", field)]
    InvalidVolume {
        field: String,
        source: ParseFloatError,
    },
}
