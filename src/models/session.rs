use serde::{Deserialize, Serialize};

/// Wallet session state: created on connect, cleared on disconnect
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSession {
    pub connected: bool,
    pub address: Option<String>,
}

impl WalletSession {
    /// Create a connected session for an address
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            connected: true,
            address: Some(address.into()),
        }
    }

    /// Create a disconnected session
    pub fn disconnected() -> Self {
        Self::default()
    }
}
