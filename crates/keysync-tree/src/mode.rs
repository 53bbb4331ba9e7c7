//! Policy mode shared by the reporter and the engine

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How unaligned documents are treated.
///
/// The tree walk is identical in both modes; only the caller's reaction to
/// the outcome differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Align targets and write them back; mismatches are hard errors.
    #[default]
    Write,
    /// Leave files untouched and collect every problem into a report.
    #[serde(alias = "verify")]
    Report,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Write => "write",
            Self::Report => "report",
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "write" => Ok(Self::Write),
            "report" | "verify" => Ok(Self::Report),
            _ => Err(Error::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
