use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::traits::identity_provider::IdentityProvider;

/// Demo account address served when no real wallet backend is wired in
pub const DEMO_ADDRESS: &str = "0x742d35Cc6634C0532925a3b8D4B9B4B73";

/// Identity provider that hands out a fixed demo address
pub struct DemoIdentityProvider {
    address: String,
    connected: RwLock<bool>,
}

impl DemoIdentityProvider {
    /// Create a provider serving the built-in demo address
    pub fn new() -> Self {
        Self::with_address(DEMO_ADDRESS)
    }

    /// Create a provider serving a specific address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connected: RwLock::new(false),
        }
    }
}

impl Default for DemoIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn connect(&self) -> anyhow::Result<String> {
        *self.connected.write().await = true;
        info!("Wallet connected: {}", self.address);
        Ok(self.address.clone())
    }

    async fn disconnect(&self) -> anyhow::Result<()> {
        *self.connected.write().await = false;
        info!("Wallet disconnected");
        Ok(())
    }

    async fn address(&self) -> Option<String> {
        if *self.connected.read().await {
            Some(self.address.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn address_is_only_visible_while_connected() {
        let identity = DemoIdentityProvider::new();
        assert_eq!(identity.address().await, None);

        let address = identity.connect().await.unwrap();
        assert_eq!(address, DEMO_ADDRESS);
        assert_eq!(identity.address().await, Some(DEMO_ADDRESS.to_string()));

        identity.disconnect().await.unwrap();
        assert_eq!(identity.address().await, None);
    }
}
