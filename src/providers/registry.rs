use async_trait::async_trait;

use crate::models::chain::{Chain, NetworkMode};
use crate::traits::chain_registry::ChainRegistry;

/// Chain registry backed by built-in mainnet and testnet lists
pub struct StaticChainRegistry {
    mainnet: Vec<Chain>,
    testnet: Vec<Chain>,
}

impl StaticChainRegistry {
    /// Create a registry with the built-in chain lists
    pub fn new() -> Self {
        Self {
            mainnet: Self::mainnet_chains(),
            testnet: Self::testnet_chains(),
        }
    }

    /// Create a registry with custom chain lists
    pub fn with_chains(mainnet: Vec<Chain>, testnet: Vec<Chain>) -> Self {
        Self { mainnet, testnet }
    }

    fn mainnet_chains() -> Vec<Chain> {
        vec![
            Chain::new("ethereum", "Ethereum"),
            Chain::new("arbitrum", "Arbitrum One"),
            Chain::new("polygon", "Polygon PoS"),
            Chain::new("base", "Base"),
            Chain::new("optimism", "OP Mainnet"),
            Chain::new("avalanche", "Avalanche C-Chain"),
        ]
    }

    fn testnet_chains() -> Vec<Chain> {
        vec![
            Chain::new("sepolia", "Ethereum Sepolia"),
            Chain::new("arbitrum-sepolia", "Arbitrum Sepolia"),
            Chain::new("polygon-amoy", "Polygon Amoy"),
            Chain::new("base-sepolia", "Base Sepolia"),
            Chain::new("optimism-sepolia", "OP Sepolia"),
            Chain::new("avalanche-fuji", "Avalanche Fuji"),
        ]
    }
}

impl Default for StaticChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainRegistry for StaticChainRegistry {
    async fn available_chains(&self, mode: NetworkMode) -> anyhow::Result<Vec<Chain>> {
        let chains = match mode {
            NetworkMode::Mainnet => self.mainnet.clone(),
            NetworkMode::Testnet => self.testnet.clone(),
        };
        Ok(chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mainnet_and_testnet_are_distinct() {
        let registry = StaticChainRegistry::new();
        let mainnet = registry.available_chains(NetworkMode::Mainnet).await.unwrap();
        let testnet = registry.available_chains(NetworkMode::Testnet).await.unwrap();

        assert_eq!(mainnet.len(), 6);
        assert_eq!(testnet.len(), 6);
        assert!(mainnet.iter().all(|c| testnet.iter().all(|t| t.id != c.id)));
    }

    #[tokio::test]
    async fn default_chain_is_first_in_list() {
        let registry = StaticChainRegistry::new();
        let default = registry.default_chain(NetworkMode::Mainnet).await.unwrap();
        assert_eq!(default.map(|c| c.id), Some("ethereum".to_string()));
    }
}
