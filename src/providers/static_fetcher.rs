use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::models::balance::ChainBalance;
use crate::models::chain::Chain;
use crate::providers::rate_provider::SimpleRateProvider;
use crate::traits::balance_fetcher::BalanceFetcher;
use crate::traits::rate_provider::RateProvider;

/// Table-driven balance fetcher.
///
/// Serves a fixed balance per chain id; chains without an entry resolve to
/// zero. USD values come from the rate provider for the configured token.
pub struct StaticBalanceFetcher {
    balances: HashMap<String, f64>,
    token: String,
    rate_provider: Arc<dyn RateProvider>,
}

impl StaticBalanceFetcher {
    /// Create a fetcher with the demo balance table
    pub fn new() -> Self {
        let balances: HashMap<String, f64> = [
            ("ethereum", 1234.56),
            ("arbitrum", 567.89),
            ("polygon", 890.12),
            ("base", 345.67),
            ("optimism", 123.45),
            ("avalanche", 678.90),
        ]
        .iter()
        .map(|(id, amount)| (id.to_string(), *amount))
        .collect();

        Self {
            balances,
            token: "USDC".to_string(),
            rate_provider: Arc::new(SimpleRateProvider::new()),
        }
    }

    /// Create a fetcher with a custom balance table
    pub fn with_balances(entries: &[(&str, f64)]) -> Self {
        let balances = entries
            .iter()
            .map(|(id, amount)| (id.to_string(), *amount))
            .collect();

        Self {
            balances,
            token: "USDC".to_string(),
            rate_provider: Arc::new(SimpleRateProvider::new()),
        }
    }

    /// Override the token whose rate drives usd_value
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Override the rate provider
    pub fn with_rate_provider(mut self, rate_provider: Arc<dyn RateProvider>) -> Self {
        self.rate_provider = rate_provider;
        self
    }
}

impl Default for StaticBalanceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BalanceFetcher for StaticBalanceFetcher {
    async fn fetch_balances(
        &self,
        address: &str,
        chains: &[Chain],
    ) -> anyhow::Result<Vec<ChainBalance>> {
        debug!("Fetching {} balances for {}", self.token, address);

        let rate = self.rate_provider.usd_rate(&self.token).await.unwrap_or(0.0);

        let balances: Vec<ChainBalance> = chains
            .iter()
            .map(|chain| {
                let amount = self.balances.get(&chain.id).copied().unwrap_or(0.0);
                ChainBalance::new(&chain.id, &chain.name, amount, amount * rate)
            })
            .collect();

        info!("Resolved balances on {} chains", balances.len());
        Ok(balances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_chains() -> Vec<Chain> {
        vec![
            Chain::new("ethereum", "Ethereum"),
            Chain::new("base", "Base"),
            Chain::new("unlisted", "Unlisted"),
        ]
    }

    #[tokio::test]
    async fn serves_table_values_and_zero_for_missing() {
        let fetcher = StaticBalanceFetcher::new();
        let balances = fetcher.fetch_balances("0xabc", &demo_chains()).await.unwrap();

        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].balance, 1234.56);
        assert_eq!(balances[1].balance, 345.67);
        assert_eq!(balances[2].balance, 0.0);
    }

    #[tokio::test]
    async fn usd_value_tracks_rate() {
        let fetcher = StaticBalanceFetcher::with_balances(&[("ethereum", 100.0)]);
        let chains = vec![Chain::new("ethereum", "Ethereum")];
        let balances = fetcher.fetch_balances("0xabc", &chains).await.unwrap();

        // USDC pegs at 1.0, so usd_value mirrors balance
        assert_eq!(balances[0].usd_value, 100.0);
    }
}
