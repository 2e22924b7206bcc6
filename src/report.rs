use serde::Serialize;

use crate::analytics::{
    consensus, top_upside, BrokerQuote, BrokerUniverse, ConsensusMetrics, UpsideEntry,
};
use crate::config::Config;
use crate::models::TradeSignal;
use crate::normalizer::normalize;
use crate::signals::SignalStore;

#[derive(Debug, Clone, Serialize)]
pub struct BrokerOutlook {
    pub name: String,
    pub index_target: String,
    pub top_conviction: Option<String>,
    pub picks: usize,
}

/// Snapshot of everything the dashboard shows, assembled from the analytics
/// operations and the signal store.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub outlooks: Vec<BrokerOutlook>,
    pub scrip: String,
    pub quotes: Vec<BrokerQuote>,
    pub consensus: Option<ConsensusMetrics>,
    pub top_upside: Vec<UpsideEntry>,
    pub signals: Vec<TradeSignal>,
}

impl DashboardReport {
    pub fn build(universe: &BrokerUniverse, store: &SignalStore, cfg: &Config) -> Self {
        let scrip = normalize(&cfg.analysis_scrip);
        let quotes = universe.compare(&scrip);
        let metrics = consensus(&quotes);
        Self {
            outlooks: universe
                .brokers()
                .iter()
                .map(|b| BrokerOutlook {
                    name: b.name.clone(),
                    index_target: b.index_target.clone(),
                    top_conviction: b.top_conviction().map(|r| r.stock.clone()),
                    picks: b.recommendations.len(),
                })
                .collect(),
            scrip,
            quotes,
            consensus: metrics,
            top_upside: top_upside(universe.brokers(), cfg.top_upside_limit),
            signals: store.signals().to_vec(),
        }
    }

    pub fn print_summary(&self) {
        println!("\n{}", "=".repeat(70));
        println!("  PSX 2026 LOOKOUT");
        println!("{}", "=".repeat(70));
        println!();
        println!("  INDEX TARGETS");
        println!("  ───────────────────────────────────");
        for o in &self.outlooks {
            println!(
                "  {:<14} {:<8} | top conviction {:<12} | {} picks",
                o.name,
                o.index_target,
                o.top_conviction.as_deref().unwrap_or("--"),
                o.picks
            );
        }
        println!();
        println!("  CONSENSUS: {}", self.scrip);
        println!("  ───────────────────────────────────");
        match &self.consensus {
            Some(m) => {
                println!("  Average:      {:.0} PKR", m.average);
                println!("  Bullish:      {}", m.high);
                println!("  Conservative: {}", m.low);
                println!("  Coverage:     {} brokers", m.coverage);
                println!();
                for q in &self.quotes {
                    let upside = q
                        .upside
                        .as_ref()
                        .map(|u| u.to_string())
                        .unwrap_or_else(|| "N/A".to_string());
                    println!(
                        "    {:<14} TP {:<8} upside {}",
                        q.broker, q.target_price, upside
                    );
                }
            }
            None => println!("  No comparative data available for this selection."),
        }
        println!();
        println!("  TOP UPSIDE");
        println!("  ───────────────────────────────────");
        for e in &self.top_upside {
            println!("  {:<14} {:>5.0}%  ({})", e.stock, e.upside, e.broker);
        }
        println!();
        println!("  ACTIVE SIGNALS");
        println!("  ───────────────────────────────────");
        if self.signals.is_empty() {
            println!("  No active signals found.");
        } else {
            for s in &self.signals {
                println!(
                    "  {:<8} {:<8} buy {:<9} TP1 {:<6} TP2 {:<6} SL {:<6} ({})",
                    s.symbol,
                    s.horizon,
                    s.buying_range,
                    s.tp1,
                    s.tp2,
                    s.stop_loss,
                    s.created_at.format("%Y-%m-%d")
                );
            }
        }
        println!("{}", "=".repeat(70));
    }
}
