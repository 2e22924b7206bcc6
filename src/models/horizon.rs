use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Holding-period category of a trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Long,
    Moderate,
    Swing,
}

impl Horizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Long => "long",
            Horizon::Moderate => "moderate",
            Horizon::Swing => "swing",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown horizon: {0}")]
pub struct ParseHorizonError(String);

impl FromStr for Horizon {
    type Err = ParseHorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Horizon::Long),
            "moderate" => Ok(Horizon::Moderate),
            "swing" => Ok(Horizon::Swing),
            _ => Err(ParseHorizonError(s.trim().to_string())),
        }
    }
}
