use async_trait::async_trait;

/// Identity/auth collaborator: wallet connection lifecycle
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Establish a wallet connection and return the account address
    async fn connect(&self) -> anyhow::Result<String>;

    /// Tear down the wallet connection
    async fn disconnect(&self) -> anyhow::Result<()>;

    /// Current address, if connected
    async fn address(&self) -> Option<String>;
}
