use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::TransferError;
use crate::models::balance::{BalanceSnapshot, ChainBalance, SelectionTotals, TransferRecord};
use crate::models::chain::{Chain, NetworkMode};
use crate::models::session::WalletSession;
use crate::traits::balance_fetcher::BalanceFetcher;
use crate::traits::chain_registry::ChainRegistry;
use crate::traits::event_handler::WalletEventHandler;
use crate::traits::identity_provider::IdentityProvider;

/// Mutable store state, guarded by a single lock so that a cross-chain move
/// is never observable half-applied.
struct StoreState {
    session: WalletSession,
    network: NetworkMode,
    balances: Vec<ChainBalance>,
}

/// Balance aggregation store.
///
/// Owns the per-chain balance records and the wallet session. Constructed once
/// per session and shared by handle; views read snapshots and invoke the
/// operations, all I/O goes through the injected collaborators.
pub struct BalanceStore {
    identity: Arc<dyn IdentityProvider>,
    fetcher: Arc<dyn BalanceFetcher>,
    registry: Arc<dyn ChainRegistry>,
    event_handlers: Vec<Arc<dyn WalletEventHandler>>,
    state: Mutex<StoreState>,
}

impl BalanceStore {
    /// Create a new store wired to its collaborators
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        fetcher: Arc<dyn BalanceFetcher>,
        registry: Arc<dyn ChainRegistry>,
    ) -> Self {
        Self {
            identity,
            fetcher,
            registry,
            event_handlers: Vec::new(),
            state: Mutex::new(StoreState {
                session: WalletSession::disconnected(),
                network: NetworkMode::default(),
                balances: Vec::new(),
            }),
        }
    }

    /// Add an event handler
    pub fn add_event_handler(&mut self, handler: Arc<dyn WalletEventHandler>) {
        self.event_handlers.push(handler);
    }

    /// Establish a session and populate balances from the collaborators
    pub async fn connect(&self) -> anyhow::Result<WalletSession> {
        let address = self.identity.connect().await?;
        let network = self.state.lock().await.network;
        let chains = self.registry.available_chains(network).await?;
        let fetched = self.fetcher.fetch_balances(&address, &chains).await?;
        let balances = sanitize_balances(fetched);

        let session = WalletSession::connected(&address);
        {
            let mut state = self.state.lock().await;
            state.session = session.clone();
            state.balances = balances.clone();
        }

        info!("Connected {} with {} chain balances", address, balances.len());
        self.notify_session(&session).await;
        self.notify_balances(&balances).await;

        Ok(session)
    }

    /// Clear session and balances
    pub async fn disconnect(&self) -> anyhow::Result<()> {
        self.identity.disconnect().await?;

        let session = WalletSession::disconnected();
        {
            let mut state = self.state.lock().await;
            state.session = session.clone();
            state.balances.clear();
        }

        info!("Session cleared");
        self.notify_session(&session).await;
        Ok(())
    }

    /// Re-fetch balances when connected; returns empty when disconnected
    pub async fn refresh(&self) -> anyhow::Result<Vec<ChainBalance>> {
        let (address, network) = {
            let state = self.state.lock().await;
            match &state.session.address {
                Some(address) if state.session.connected => (address.clone(), state.network),
                _ => {
                    debug!("Refresh without a session is a no-op");
                    return Ok(Vec::new());
                }
            }
        };

        let chains = self.registry.available_chains(network).await?;
        let balances = match self.fetcher.fetch_balances(&address, &chains).await {
            Ok(fetched) => sanitize_balances(fetched),
            Err(e) => {
                self.notify_error(&e).await;
                return Err(e);
            }
        };

        self.state.lock().await.balances = balances.clone();
        self.notify_balances(&balances).await;
        Ok(balances)
    }

    /// Move value between two chains, 1:1 with no fee or slippage.
    ///
    /// Both records mutate inside one lock acquisition, so no reader observes
    /// value removed from the source but not yet added to the destination.
    pub async fn move_value(
        &self,
        from_chain: &str,
        to_chain: &str,
        amount: f64,
    ) -> Result<(), TransferError> {
        if from_chain == to_chain {
            return Err(TransferError::SameChain(from_chain.to_string()));
        }
        if amount <= 0.0 {
            return Err(TransferError::NonPositiveAmount(amount));
        }

        {
            let mut state = self.state.lock().await;
            if !state.session.connected {
                return Err(TransferError::NotConnected);
            }

            let from_idx = index_of(&state.balances, from_chain)
                .ok_or_else(|| TransferError::unknown_chain(from_chain))?;
            let to_idx = index_of(&state.balances, to_chain)
                .ok_or_else(|| TransferError::unknown_chain(to_chain))?;

            let available = state.balances[from_idx].balance;
            if amount > available {
                return Err(TransferError::insufficient(from_chain, amount, available));
            }

            state.balances[from_idx].balance -= amount;
            state.balances[from_idx].usd_value -= amount;
            state.balances[to_idx].balance += amount;
            state.balances[to_idx].usd_value += amount;
        }

        info!("Moving {:.2} from {} to {}", amount, from_chain, to_chain);
        let record = TransferRecord::new(from_chain, to_chain, amount);
        self.notify_transfer(&record).await;
        Ok(())
    }

    /// Move the full balance of each selected chain to a target chain.
    ///
    /// Transfers apply sequentially and zero-balance sources are skipped. On a
    /// mid-sequence failure the transfers already applied stay applied; the
    /// error names the chain that failed.
    pub async fn move_all_to(
        &self,
        selected: &[&str],
        target: &str,
    ) -> Result<Vec<TransferRecord>, TransferError> {
        let mut applied = Vec::new();

        for chain_id in selected {
            let amount = {
                let state = self.state.lock().await;
                if !state.session.connected {
                    return Err(TransferError::NotConnected);
                }
                match index_of(&state.balances, chain_id) {
                    Some(idx) => state.balances[idx].balance,
                    None => return Err(TransferError::unknown_chain(*chain_id)),
                }
            };

            if amount <= 0.0 {
                debug!("Skipping {} with empty balance", chain_id);
                continue;
            }

            self.move_value(chain_id, target, amount).await?;
            applied.push(TransferRecord::new(*chain_id, target, amount));
        }

        info!("Moved {} chain balances to {}", applied.len(), target);
        Ok(applied)
    }

    /// Sum balance and usd_value over exactly the selected chain ids.
    ///
    /// Ids not present in the current balance set contribute nothing.
    pub async fn selection_totals(&self, selected: &[&str]) -> SelectionTotals {
        let state = self.state.lock().await;
        let mut totals = SelectionTotals::default();

        for balance in &state.balances {
            if selected.iter().any(|id| *id == balance.chain_id) {
                totals.chains += 1;
                totals.balance += balance.balance;
                totals.usd_value += balance.usd_value;
            }
        }

        totals
    }

    /// Read-only snapshot of session address, balances and total USD value
    pub async fn snapshot(&self) -> BalanceSnapshot {
        let state = self.state.lock().await;
        let total_usd = state.balances.iter().map(|b| b.usd_value).sum();

        BalanceSnapshot {
            timestamp: Utc::now(),
            address: state.session.address.clone(),
            balances: state.balances.clone(),
            total_usd,
        }
    }

    /// Current session state
    pub async fn session(&self) -> WalletSession {
        self.state.lock().await.session.clone()
    }

    /// Total USD value across all chains
    pub async fn total_usd(&self) -> f64 {
        let state = self.state.lock().await;
        state.balances.iter().map(|b| b.usd_value).sum()
    }

    /// Current network mode
    pub async fn network_mode(&self) -> NetworkMode {
        self.state.lock().await.network
    }

    /// Switch network mode; re-fetches balances when a session is active
    pub async fn set_network_mode(&self, mode: NetworkMode) -> anyhow::Result<()> {
        {
            let mut state = self.state.lock().await;
            if state.network == mode {
                return Ok(());
            }
            state.network = mode;
        }

        info!("Network mode set to {}", mode);
        self.refresh().await?;
        Ok(())
    }

    /// Chains available in the current network mode
    pub async fn available_chains(&self) -> anyhow::Result<Vec<Chain>> {
        let network = self.state.lock().await.network;
        self.registry.available_chains(network).await
    }

    async fn notify_session(&self, session: &WalletSession) {
        for handler in &self.event_handlers {
            handler.on_session_changed(session).await;
        }
    }

    async fn notify_balances(&self, balances: &[ChainBalance]) {
        for handler in &self.event_handlers {
            handler.on_balances_changed(balances).await;
        }
    }

    async fn notify_transfer(&self, record: &TransferRecord) {
        for handler in &self.event_handlers {
            handler.on_transfer(record).await;
        }
    }

    async fn notify_error(&self, error: &anyhow::Error) {
        for handler in &self.event_handlers {
            handler.on_error(error).await;
        }
    }
}

fn index_of(balances: &[ChainBalance], chain_id: &str) -> Option<usize> {
    balances.iter().position(|b| b.chain_id == chain_id)
}

/// Enforce the balance-set invariants on fetched data: no duplicate chain ids,
/// no negative amounts.
fn sanitize_balances(fetched: Vec<ChainBalance>) -> Vec<ChainBalance> {
    let mut balances: Vec<ChainBalance> = Vec::with_capacity(fetched.len());

    for balance in fetched {
        if balance.balance < 0.0 || balance.usd_value < 0.0 {
            warn!("Dropping negative balance for {}", balance.chain_id);
            continue;
        }
        if balances.iter().any(|b| b.chain_id == balance.chain_id) {
            warn!("Dropping duplicate balance entry for {}", balance.chain_id);
            continue;
        }
        balances.push(balance);
    }

    balances
}
