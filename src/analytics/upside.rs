use serde::{Deserialize, Serialize};

use crate::models::Broker;

/// One ranked entry in the top-upside chart. The stock keeps its source
/// spelling; the ranking is over individual broker calls, not merged scrips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsideEntry {
    pub stock: String,
    pub upside: f64,
    pub broker: String,
}

/// The `limit` recommendations with the highest projected upside across all
/// brokers. Percent strings coerce numerically; entries without a usable
/// upside are skipped. Ties keep scan order.
pub fn top_upside(brokers: &[Broker], limit: usize) -> Vec<UpsideEntry> {
    let mut entries: Vec<UpsideEntry> = brokers
        .iter()
        .flat_map(|b| {
            b.recommendations.iter().filter_map(move |r| {
                let upside = r.upside.as_ref()?.as_f64()?;
                Some(UpsideEntry {
                    stock: r.stock.clone(),
                    upside,
                    broker: b.name.clone(),
                })
            })
        })
        .collect();
    entries.sort_by(|a, b| b.upside.total_cmp(&a.upside));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{make_broker, make_rec};

    fn fixture() -> Vec<Broker> {
        vec![
            make_broker(
                "Alpha",
                "215k",
                vec![
                    make_rec("GWLC", Some(87.0), Some("68%")),
                    make_rec("ISL", Some(159.0), Some("68%")),
                    make_rec("MLCF", Some(151.0), Some("60%")),
                    make_rec("NATF", None, None),
                ],
            ),
            make_broker(
                "Beta",
                "206k",
                vec![
                    make_rec("PSO", Some(727.0), Some("60%")),
                    make_rec("FFC", Some(670.0), Some("14%")),
                ],
            ),
        ]
    }

    #[test]
    fn sorted_descending_with_stable_ties() {
        let top = top_upside(&fixture(), 2);
        // Two 68% calls win; the 60% entries are cut. Scan order breaks the tie.
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].stock, "GWLC");
        assert_eq!(top[1].stock, "ISL");
    }

    #[test]
    fn equal_upside_across_brokers_keeps_broker_order() {
        let top = top_upside(&fixture(), 4);
        assert_eq!(top[2].stock, "MLCF");
        assert_eq!(top[2].broker, "Alpha");
        assert_eq!(top[3].stock, "PSO");
        assert_eq!(top[3].broker, "Beta");
    }

    #[test]
    fn skips_entries_without_upside() {
        let top = top_upside(&fixture(), 100);
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|e| e.stock != "NATF"));
    }

    #[test]
    fn zero_limit_is_empty() {
        assert!(top_upside(&fixture(), 0).is_empty());
    }

    #[test]
    fn no_upside_data_yields_empty() {
        let brokers = vec![make_broker(
            "Quiet",
            "203k",
            vec![make_rec("OGDC", Some(365.0), None)],
        )];
        assert!(top_upside(&brokers, 8).is_empty());
    }
}
