use async_trait::async_trait;

/// Trait for token USD rate providers
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the USD rate for a token symbol
    async fn usd_rate(&self, token: &str) -> Option<f64>;

    /// Get rates for multiple tokens (optimized batch request)
    async fn batch_rates(&self, tokens: &[String]) -> Vec<Option<f64>> {
        let mut rates = Vec::with_capacity(tokens.len());
        for token in tokens {
            rates.push(self.usd_rate(token).await);
        }
        rates
    }
}
