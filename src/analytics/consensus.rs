use serde::{Deserialize, Serialize};

use crate::analytics::universe::BrokerQuote;

/// Aggregate of all broker targets for one scrip. The average is rounded to
/// the nearest whole rupee, as published on the dashboard; high and low keep
/// their fractional targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusMetrics {
    pub average: f64,
    pub high: f64,
    pub low: f64,
    pub coverage: usize,
}

/// `None` iff no broker covers the scrip with a numeric target.
pub fn consensus(quotes: &[BrokerQuote]) -> Option<ConsensusMetrics> {
    if quotes.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    let mut high = f64::NEG_INFINITY;
    let mut low = f64::INFINITY;
    for q in quotes {
        sum += q.target_price;
        high = high.max(q.target_price);
        low = low.min(q.target_price);
    }
    Some(ConsensusMetrics {
        average: (sum / quotes.len() as f64).round(),
        high,
        low,
        coverage: quotes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(broker: &str, tp: f64) -> BrokerQuote {
        BrokerQuote {
            broker: broker.to_string(),
            target_price: tp,
            upside: None,
        }
    }

    #[test]
    fn empty_view_has_no_consensus() {
        assert_eq!(consensus(&[]), None);
    }

    #[test]
    fn two_broker_alias_merge_example() {
        let quotes = vec![quote("Alpha", 350.0), quote("Beta", 392.0)];
        let m = consensus(&quotes).unwrap();
        assert_eq!(m.average, 371.0);
        assert_eq!(m.high, 392.0);
        assert_eq!(m.low, 350.0);
        assert_eq!(m.coverage, 2);
    }

    #[test]
    fn average_rounds_to_nearest_integer() {
        let quotes = vec![quote("A", 100.0), quote("B", 101.0), quote("C", 101.0)];
        // mean 100.666... rounds to 101
        assert_eq!(consensus(&quotes).unwrap().average, 101.0);
    }

    #[test]
    fn single_quote_collapses_all_metrics() {
        let m = consensus(&[quote("A", 273.5)]).unwrap();
        assert_eq!(m.high, 273.5);
        assert_eq!(m.low, 273.5);
        assert_eq!(m.average, 274.0);
        assert_eq!(m.coverage, 1);
    }

    #[test]
    fn low_never_exceeds_average_or_high() {
        let quotes = vec![quote("A", 350.0), quote("B", 423.0), quote("C", 347.0)];
        let m = consensus(&quotes).unwrap();
        assert!(m.low <= m.average && m.average <= m.high);
        assert_eq!(m.coverage, quotes.len());
    }
}
