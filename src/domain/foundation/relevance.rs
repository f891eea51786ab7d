//! Relevance level attached to each module insight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// How strongly an insight should weigh on cross-module analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relevance {
    High,
    #[default]
    Medium,
    Low,
}

impl Relevance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relevance::High => "high",
            Relevance::Medium => "medium",
            Relevance::Low => "low",
        }
    }
}

impl fmt::Display for Relevance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relevance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Relevance::High),
            "medium" => Ok(Relevance::Medium),
            "low" => Ok(Relevance::Low),
            _ => Err(ValidationError::invalid_format(
                "relevance",
                format!("unknown relevance '{}'", s),
            )),
        }
    }
}
