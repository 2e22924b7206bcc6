use chrono::Utc;
use tracing::debug;

use crate::models::{SignalDraft, TradeSignal};

/// In-memory list of user trade signals, newest first. Lives only for the
/// process lifetime; ids come from a monotonic counter and are never reused,
/// even after deletion.
#[derive(Debug)]
pub struct SignalStore {
    signals: Vec<TradeSignal>,
    next_id: u64,
}

impl SignalStore {
    pub fn new() -> Self {
        Self {
            signals: Vec::new(),
            next_id: 1,
        }
    }

    /// Adds a signal, assigning its id and creation timestamp. The symbol is
    /// stored trimmed and uppercased. No alias mapping happens here: the
    /// analysis path merges aliases, the signal list shows what the user
    /// typed.
    pub fn create(&mut self, draft: SignalDraft) -> &TradeSignal {
        let id = format!("sig-{}", self.next_id);
        self.next_id += 1;
        let signal = TradeSignal {
            id,
            symbol: draft.symbol.trim().to_uppercase(),
            buying_range: draft.buying_range,
            tp1: draft.tp1,
            tp2: draft.tp2,
            stop_loss: draft.stop_loss,
            horizon: draft.horizon,
            created_at: Utc::now(),
        };
        debug!(
            "signal created: {} {} ({})",
            signal.id, signal.symbol, signal.horizon
        );
        self.signals.insert(0, signal);
        &self.signals[0]
    }

    /// Removes the signal with the given id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.signals.len();
        self.signals.retain(|s| s.id != id);
        let removed = self.signals.len() < before;
        if removed {
            debug!("signal deleted: {}", id);
        }
        removed
    }

    /// Active signals, most recently created first.
    pub fn signals(&self) -> &[TradeSignal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

impl Default for SignalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Horizon;

    fn draft(symbol: &str) -> SignalDraft {
        SignalDraft {
            symbol: symbol.to_string(),
            buying_range: "440-450".to_string(),
            tp1: 520.0,
            tp2: 600.0,
            stop_loss: 420.0,
            horizon: Horizon::Long,
        }
    }

    #[test]
    fn new_signal_goes_first() {
        let mut store = SignalStore::new();
        store.create(draft("MEBL"));
        store.create(draft("SYS"));
        assert_eq!(store.signals()[0].symbol, "SYS");
        assert_eq!(store.signals()[1].symbol, "MEBL");
    }

    #[test]
    fn symbol_is_trimmed_and_uppercased_without_aliasing() {
        let mut store = SignalStore::new();
        let sym = store.create(draft(" ogdc ")).symbol.clone();
        // uppercased only; the alias table is an analytics concern
        assert_eq!(sym, "OGDC");
    }

    #[test]
    fn create_then_delete_restores_prior_state() {
        let mut store = SignalStore::new();
        store.create(draft("MEBL"));
        let before: Vec<String> = store.signals().iter().map(|s| s.id.clone()).collect();

        let id = store.create(draft("SYS")).id.clone();
        assert!(store.delete(&id));

        let after: Vec<String> = store.signals().iter().map(|s| s.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn deleting_unknown_id_is_a_noop() {
        let mut store = SignalStore::new();
        store.create(draft("MEBL"));
        assert!(!store.delete("sig-999"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut store = SignalStore::new();
        let first = store.create(draft("MEBL")).id.clone();
        store.delete(&first);
        let second = store.create(draft("MEBL")).id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn ids_are_unique_across_live_signals() {
        let mut store = SignalStore::new();
        for _ in 0..5 {
            store.create(draft("MEBL"));
        }
        let mut ids: Vec<&str> = store.signals().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }
}
