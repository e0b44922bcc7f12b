//! Stablewallet Core Library
//!
//! Chain-balance aggregation and cross-chain transfer simulation for a
//! multi-chain stablecoin wallet. The store owns the per-chain balance
//! records and the wallet session; identity, balance fetching, chain lists
//! and rates all go through collaborator traits.

// Public modules - these are the API surface
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod handlers;
pub mod store;
pub mod storage;
pub mod utils;

// Re-export commonly used items for easier access
pub use error::TransferError;
pub use models::{
    balance::{BalanceSnapshot, ChainBalance, SelectionTotals, TransferRecord},
    chain::{Chain, NetworkMode},
    preferences::{ExpertiseLevel, Region, Token, UserPreferences},
    session::WalletSession,
};
pub use traits::{
    balance_fetcher::BalanceFetcher,
    chain_registry::ChainRegistry,
    event_handler::WalletEventHandler,
    identity_provider::IdentityProvider,
    rate_provider::RateProvider,
};
pub use providers::{
    identity::DemoIdentityProvider,
    rate_provider::SimpleRateProvider,
    registry::StaticChainRegistry,
    static_fetcher::StaticBalanceFetcher,
};
pub use handlers::{
    composite::CompositeEventHandler,
    console::ConsoleEventHandler,
};
pub use store::balance_store::BalanceStore;
pub use storage::preference_store::PreferenceStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
