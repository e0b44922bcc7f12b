//! Error types for store operations
//!
//! Every transfer failure is local and recoverable: the store stays usable
//! after any rejected operation.

use thiserror::Error;

/// Errors returned by `BalanceStore::move_value` and the multi-chain move flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("no active wallet session")]
    NotConnected,

    #[error("unknown chain: {0}")]
    UnknownChain(String),

    #[error("source and destination chain are the same: {0}")]
    SameChain(String),

    #[error("transfer amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("insufficient balance on {chain_id}: requested {requested}, available {available}")]
    InsufficientBalance {
        chain_id: String,
        requested: f64,
        available: f64,
    },
}

impl TransferError {
    /// Create an unknown chain error
    pub fn unknown_chain(chain_id: impl Into<String>) -> Self {
        Self::UnknownChain(chain_id.into())
    }

    /// Create an insufficient balance error
    pub fn insufficient(chain_id: impl Into<String>, requested: f64, available: f64) -> Self {
        Self::InsufficientBalance {
            chain_id: chain_id.into(),
            requested,
            available,
        }
    }
}
