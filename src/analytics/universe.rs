use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use crate::models::{Broker, Figure};
use crate::normalizer::normalize;

/// One broker's row in a cross-broker comparison. The upside is carried in
/// its raw published form for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerQuote {
    pub broker: String,
    pub target_price: f64,
    pub upside: Option<Figure>,
}

/// The broker dataset plus the scrip universe derived from it. The dataset
/// never changes after load, so the universe is computed once up front.
#[derive(Debug, Clone)]
pub struct BrokerUniverse {
    brokers: Vec<Broker>,
    scrips: Vec<String>,
}

impl BrokerUniverse {
    pub fn new(brokers: Vec<Broker>) -> Self {
        let scrips: BTreeSet<String> = brokers
            .iter()
            .flat_map(|b| b.recommendations.iter())
            .map(|r| normalize(&r.stock))
            .collect();
        let scrips: Vec<String> = scrips.into_iter().collect();
        debug!(
            "scrip universe built: {} symbols across {} brokers",
            scrips.len(),
            brokers.len()
        );
        Self { brokers, scrips }
    }

    pub fn brokers(&self) -> &[Broker] {
        &self.brokers
    }

    /// Every scrip recommended by any broker, de-duplicated under alias
    /// normalization and sorted ascending.
    pub fn scrips(&self) -> &[String] {
        &self.scrips
    }

    /// Target prices for one canonical scrip across all brokers, in dataset
    /// order. A broker contributes its first matching recommendation, and
    /// only when that recommendation carries a parsable target price.
    pub fn compare(&self, scrip: &str) -> Vec<BrokerQuote> {
        self.brokers
            .iter()
            .filter_map(|b| {
                let rec = b
                    .recommendations
                    .iter()
                    .find(|r| normalize(&r.stock) == scrip)?;
                let target = rec.tp.as_ref()?.as_f64()?;
                Some(BrokerQuote {
                    broker: b.name.clone(),
                    target_price: target,
                    upside: rec.upside.clone(),
                })
            })
            .collect()
    }
}
