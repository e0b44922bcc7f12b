use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::traits::rate_provider::RateProvider;

/// Simple rate provider with caching
pub struct SimpleRateProvider {
    rate_cache: Arc<DashMap<String, f64>>,
}

impl SimpleRateProvider {
    /// Create a new simple rate provider
    pub fn new() -> Self {
        Self {
            rate_cache: Arc::new(DashMap::new()),
        }
    }

    /// Fetch rate from external API
    async fn fetch_external_rate(&self, token: &str) -> anyhow::Result<f64> {
        // Known stablecoin pegs (for demo purposes)
        let known_rates: HashMap<&str, f64> = [
            ("USDC", 1.0),
            ("USDT", 1.0),
            ("EURC", 1.08),
        ]
        .iter()
        .cloned()
        .collect();

        if let Some(&rate) = known_rates.get(token) {
            debug!("Found known rate for {}: ${}", token, rate);
            return Ok(rate);
        }

        // In production, fetch from a price oracle
        // For now, return 0.0 for unknown tokens
        Ok(0.0)
    }
}

impl Default for SimpleRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for SimpleRateProvider {
    async fn usd_rate(&self, token: &str) -> Option<f64> {
        // Check cache first
        if let Some(rate) = self.rate_cache.get(token) {
            return Some(*rate);
        }

        // Fetch from external source
        match self.fetch_external_rate(token).await {
            Ok(rate) => {
                self.rate_cache.insert(token.to_string(), rate);
                Some(rate)
            }
            Err(e) => {
                debug!("Failed to fetch rate for {}: {}", token, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_pegs_resolve() {
        let provider = SimpleRateProvider::new();
        assert_eq!(provider.usd_rate("USDC").await, Some(1.0));
        assert_eq!(provider.usd_rate("EURC").await, Some(1.08));
    }

    #[tokio::test]
    async fn unknown_token_rates_zero() {
        let provider = SimpleRateProvider::new();
        assert_eq!(provider.usd_rate("DOGE").await, Some(0.0));
    }

    #[tokio::test]
    async fn batch_rates_match_single_lookups() {
        let provider = SimpleRateProvider::new();
        let tokens = vec!["USDC".to_string(), "EURC".to_string()];
        let rates = provider.batch_rates(&tokens).await;
        assert_eq!(rates, vec![Some(1.0), Some(1.08)]);
    }
}
