use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stablecoin balance on a single chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainBalance {
    pub chain_id: String,
    pub chain_name: String,
    pub balance: f64,
    pub usd_value: f64,
}

impl ChainBalance {
    /// Create a new chain balance
    pub fn new(
        chain_id: impl Into<String>,
        chain_name: impl Into<String>,
        balance: f64,
        usd_value: f64,
    ) -> Self {
        Self {
            chain_id: chain_id.into(),
            chain_name: chain_name.into(),
            balance,
            usd_value,
        }
    }

    /// Whether the chain holds any value
    pub fn is_empty(&self) -> bool {
        self.balance <= 0.0
    }

    /// Format balance with a token symbol
    pub fn formatted_amount(&self, token: &str) -> String {
        format!("{:.2} {}", self.balance, token)
    }
}

/// Read-only view of the store at a specific time
#[derive(Debug, Clone)]
pub struct BalanceSnapshot {
    pub timestamp: DateTime<Utc>,
    pub address: Option<String>,
    pub balances: Vec<ChainBalance>,
    pub total_usd: f64,
}

impl BalanceSnapshot {
    /// Get balance for a specific chain
    pub fn get_balance(&self, chain_id: &str) -> Option<&ChainBalance> {
        self.balances.iter().find(|b| b.chain_id == chain_id)
    }

    /// Check if snapshot is empty (no chains)
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Number of chains in the snapshot
    pub fn chain_count(&self) -> usize {
        self.balances.len()
    }
}

/// Aggregate over a user-selected subset of chains, used to preview a move
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SelectionTotals {
    pub chains: usize,
    pub balance: f64,
    pub usd_value: f64,
}

impl SelectionTotals {
    pub fn is_empty(&self) -> bool {
        self.chains == 0
    }
}

/// A completed simulated transfer between two chains
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub from_chain: String,
    pub to_chain: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl TransferRecord {
    /// Create a new transfer record stamped with the current time
    pub fn new(from_chain: impl Into<String>, to_chain: impl Into<String>, amount: f64) -> Self {
        Self {
            from_chain: from_chain.into(),
            to_chain: to_chain.into(),
            amount,
            timestamp: Utc::now(),
        }
    }
}
