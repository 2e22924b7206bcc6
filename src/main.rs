use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use psx_lookout::analytics::BrokerUniverse;
use psx_lookout::config::Config;
use psx_lookout::data;
use psx_lookout::report::DashboardReport;
use psx_lookout::signals::SignalStore;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let universe = BrokerUniverse::new(data::brokers());
    info!(
        "loaded {} brokers covering {} scrips",
        universe.brokers().len(),
        universe.scrips().len()
    );

    let mut store = SignalStore::new();
    if cfg.seed_signals {
        for draft in data::seed_signals() {
            store.create(draft);
        }
    }

    let report = DashboardReport::build(&universe, &store, &cfg);
    if cfg.report_format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_summary();
    }

    Ok(())
}
