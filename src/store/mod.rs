//! The balance aggregation store

pub mod balance_store;

pub use balance_store::BalanceStore;
