//! Wallet repository and service traits.

use async_trait::async_trait;

use super::wallet_model::{WalletSnapshot, WalletView};
use crate::errors::Result;

/// Trait defining the contract for wallet reads.
#[async_trait]
pub trait WalletRepositoryTrait: Send + Sync {
    /// Fetches the authoritative wallet state for the current identity.
    async fn fetch_wallet(&self) -> Result<WalletSnapshot>;
}

/// Trait defining the contract for wallet service operations.
#[async_trait]
pub trait WalletServiceTrait: Send + Sync {
    /// Fetches a fresh authoritative snapshot, reconciles the pending
    /// overlay against it, and returns the rendered view.
    async fn refresh_wallet(&self) -> Result<WalletView>;
}
