use async_trait::async_trait;
use tracing::info;

use crate::models::balance::{ChainBalance, TransferRecord};
use crate::models::session::WalletSession;
use crate::traits::event_handler::WalletEventHandler;
use crate::utils::helper::{format_address, format_usd};

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletEventHandler for ConsoleEventHandler {
    async fn on_session_changed(&self, session: &WalletSession) {
        match &session.address {
            Some(address) if session.connected => {
                info!("Session connected: {}", format_address(address));
            }
            _ => {
                info!("Session disconnected");
            }
        }
    }

    async fn on_balances_changed(&self, balances: &[ChainBalance]) {
        info!("Balances updated:");
        info!("{}", "-".repeat(60));

        let mut total = 0.0;
        for balance in balances {
            info!(
                "  {:<20} {:>12.2}  ({})",
                balance.chain_name,
                balance.balance,
                format_usd(balance.usd_value)
            );
            total += balance.usd_value;
        }

        info!("{}", "-".repeat(60));
        info!("  Total: {}", format_usd(total));
    }

    async fn on_transfer(&self, transfer: &TransferRecord) {
        info!(
            "Moved {:.2} from {} to {}",
            transfer.amount, transfer.from_chain, transfer.to_chain
        );
    }

    async fn on_error(&self, error: &anyhow::Error) {
        info!("Store error: {}", error);
    }
}
