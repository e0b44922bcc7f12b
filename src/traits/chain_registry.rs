use async_trait::async_trait;

use crate::models::chain::{Chain, NetworkMode};

/// Chain-registry collaborator: which chains exist per network mode
#[async_trait]
pub trait ChainRegistry: Send + Sync {
    /// List the chains available in the given mode
    async fn available_chains(&self, mode: NetworkMode) -> anyhow::Result<Vec<Chain>>;

    /// Default chain for the given mode (first in the list unless overridden)
    async fn default_chain(&self, mode: NetworkMode) -> anyhow::Result<Option<Chain>> {
        let chains = self.available_chains(mode).await?;
        Ok(chains.into_iter().next())
    }
}
