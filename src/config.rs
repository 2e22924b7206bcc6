use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Analysis
    pub analysis_scrip: String,
    pub top_upside_limit: usize,

    // Signals
    pub seed_signals: bool,

    // Output
    pub report_format: String,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            analysis_scrip: env("ANALYSIS_SCRIP", "OGDCL"),
            top_upside_limit: env("TOP_UPSIDE_LIMIT", "8").parse().unwrap_or(8),
            seed_signals: env("SEED_SIGNALS", "true").to_lowercase() == "true",
            report_format: env("REPORT_FORMAT", "text").to_lowercase(),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
