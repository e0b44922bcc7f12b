use std::sync::Arc;

use async_trait::async_trait;

use crate::models::balance::{ChainBalance, TransferRecord};
use crate::models::session::WalletSession;
use crate::traits::event_handler::WalletEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn WalletEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn WalletEventHandler>) {
        self.handlers.push(handler);
    }

    /// Check if there are any handlers
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Number of handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WalletEventHandler for CompositeEventHandler {
    async fn on_session_changed(&self, session: &WalletSession) {
        for handler in &self.handlers {
            handler.on_session_changed(session).await;
        }
    }

    async fn on_balances_changed(&self, balances: &[ChainBalance]) {
        for handler in &self.handlers {
            handler.on_balances_changed(balances).await;
        }
    }

    async fn on_transfer(&self, transfer: &TransferRecord) {
        for handler in &self.handlers {
            handler.on_transfer(transfer).await;
        }
    }

    async fn on_error(&self, error: &anyhow::Error) {
        for handler in &self.handlers {
            handler.on_error(error).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WalletEventHandler for CountingHandler {
        async fn on_session_changed(&self, _session: &WalletSession) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_balances_changed(&self, _balances: &[ChainBalance]) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_transfer(&self, _transfer: &TransferRecord) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }

        async fn on_error(&self, _error: &anyhow::Error) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn fans_out_to_every_handler() {
        let first = Arc::new(CountingHandler { calls: AtomicUsize::new(0) });
        let second = Arc::new(CountingHandler { calls: AtomicUsize::new(0) });

        let mut composite = CompositeEventHandler::new();
        composite.add_handler(first.clone());
        composite.add_handler(second.clone());
        assert_eq!(composite.len(), 2);

        composite.on_session_changed(&WalletSession::connected("0xabc")).await;
        composite.on_transfer(&TransferRecord::new("ethereum", "base", 1.0)).await;

        assert_eq!(first.calls.load(Ordering::SeqCst), 2);
        assert_eq!(second.calls.load(Ordering::SeqCst), 2);
    }
}
