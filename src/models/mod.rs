pub mod broker;
pub mod horizon;
pub mod signal;

pub use broker::{Broker, Figure, Recommendation};
pub use horizon::{Horizon, ParseHorizonError};
pub use signal::{SignalDraft, TradeSignal};
