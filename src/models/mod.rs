//! Data models for the balance aggregation store

pub mod balance;
pub mod chain;
pub mod preferences;
pub mod session;

// Re-export for convenience
pub use balance::{BalanceSnapshot, ChainBalance, SelectionTotals, TransferRecord};
pub use chain::{Chain, NetworkMode};
pub use preferences::{ExpertiseLevel, Region, Token, UserPreferences};
pub use session::WalletSession;
