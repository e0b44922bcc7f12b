use async_trait::async_trait;

use crate::models::balance::{ChainBalance, TransferRecord};
use crate::models::session::WalletSession;

/// Handler for store events, consumed by UI-facing code
#[async_trait]
pub trait WalletEventHandler: Send + Sync {
    /// Called when the session connects or disconnects
    async fn on_session_changed(&self, session: &WalletSession);

    /// Called when the balance set is (re)populated
    async fn on_balances_changed(&self, balances: &[ChainBalance]);

    /// Called after a successful cross-chain move
    async fn on_transfer(&self, transfer: &TransferRecord);

    /// Handle error - using reference to avoid cloning issues
    async fn on_error(&self, error: &anyhow::Error);
}
