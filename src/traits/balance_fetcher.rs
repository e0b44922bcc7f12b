use async_trait::async_trait;

use crate::models::balance::ChainBalance;
use crate::models::chain::Chain;

/// Balance-fetch collaborator: resolves per-chain stablecoin balances for an
/// address. Real implementations talk to chain RPC endpoints; the store only
/// depends on this seam.
#[async_trait]
pub trait BalanceFetcher: Send + Sync {
    /// Fetch balances for an address across the given chains
    async fn fetch_balances(
        &self,
        address: &str,
        chains: &[Chain],
    ) -> anyhow::Result<Vec<ChainBalance>>;
}
