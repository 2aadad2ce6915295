//! Statement download formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownStatementFormat;

/// Media type requested through the `Accept` header of a statement download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementFormat {
    #[default]
    #[serde(rename = "text/csv")]
    Csv,
    #[serde(rename = "application/pdf")]
    Pdf,
}

impl StatementFormat {
    /// Every media type the statement endpoints accept.
    pub const MEDIA_TYPES: &'static [&'static str] = &["application/pdf", "text/csv"];

    pub fn media_type(&self) -> &'static str {
        match self {
            StatementFormat::Csv => "text/csv",
            StatementFormat::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

impl FromStr for StatementFormat {
    type Err = UnknownStatementFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" | "text/csv" => Ok(StatementFormat::Csv),
            "pdf" | "application/pdf" => Ok(StatementFormat::Pdf),
            _ => Err(UnknownStatementFormat(s.to_string())),
        }
    }
}
