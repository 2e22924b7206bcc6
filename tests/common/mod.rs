use psx_lookout::models::{Horizon, SignalDraft};

/// A minimal long signal draft for store round-trip tests.
pub fn make_draft(symbol: &str) -> SignalDraft {
    SignalDraft {
        symbol: symbol.to_string(),
        buying_range: "440-450".to_string(),
        tp1: 520.0,
        tp2: 600.0,
        stop_loss: 420.0,
        horizon: Horizon::Long,
    }
}
