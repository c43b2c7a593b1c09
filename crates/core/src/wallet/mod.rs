//! Wallet module - balances, transaction history, and the pending
//! overlay applied between authoritative fetches.

mod pending;
mod wallet_model;
mod wallet_service;
mod wallet_traits;

// Re-export the public interface
pub use pending::{PendingDelta, PendingLedger};
pub use wallet_model::{
    Transaction, TransactionFilter, TransactionKind, TransactionStatus, WalletSnapshot,
    WalletView,
};
pub use wallet_service::WalletService;
pub use wallet_traits::{WalletRepositoryTrait, WalletServiceTrait};
