use serde::{Deserialize, Serialize};
use std::fmt;

/// A value from a broker report that may be a number, a string (often with
/// a trailing percent sign), or missing entirely in the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Figure {
    Number(f64),
    Text(String),
}

impl Figure {
    /// Numeric coercion. Text is trimmed and a trailing `%` stripped before
    /// parsing; anything that still fails to parse counts as absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Figure::Number(n) => Some(*n),
            Figure::Text(s) => {
                let cleaned = s.trim().trim_end_matches('%');
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok()
            }
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Number(n) => write!(f, "{}", n),
            Figure::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One broker's call on one stock. Brokers sometimes list a scrip without a
/// numeric target; those rows still appear in the report table but carry no
/// weight in any aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub stock: String,
    #[serde(default)]
    pub tp: Option<Figure>,
    #[serde(default)]
    pub price: Option<Figure>,
    #[serde(default)]
    pub upside: Option<Figure>,
}

/// A broker's published outlook: index target plus its recommendation list
/// in source order (first entry is the top conviction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broker {
    pub name: String,
    pub index_target: String,
    pub recommendations: Vec<Recommendation>,
}

impl Broker {
    pub fn top_conviction(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}
