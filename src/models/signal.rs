use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Horizon;

/// A user-entered trade idea shown as a flashcard on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSignal {
    pub id: String,
    pub symbol: String,
    pub buying_range: String,
    pub tp1: f64,
    pub tp2: f64,
    pub stop_loss: f64,
    pub horizon: Horizon,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new signal. The store assigns the id and
/// creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalDraft {
    pub symbol: String,
    pub buying_range: String,
    pub tp1: f64,
    pub tp2: f64,
    pub stop_loss: f64,
    pub horizon: Horizon,
}
