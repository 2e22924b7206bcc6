pub mod consensus;
pub mod universe;
pub mod upside;

pub use consensus::{consensus, ConsensusMetrics};
pub use universe::{BrokerQuote, BrokerUniverse};
pub use upside::{top_upside, UpsideEntry};
