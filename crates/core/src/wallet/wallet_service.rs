use log::debug;
use std::sync::Arc;

use super::pending::PendingLedger;
use super::wallet_model::WalletView;
use super::wallet_traits::{WalletRepositoryTrait, WalletServiceTrait};
use crate::errors::Result;

/// Service for reading the wallet with the pending overlay applied.
pub struct WalletService {
    repository: Arc<dyn WalletRepositoryTrait>,
    pending: Arc<PendingLedger>,
}

impl WalletService {
    pub fn new(repository: Arc<dyn WalletRepositoryTrait>, pending: Arc<PendingLedger>) -> Self {
        Self {
            repository,
            pending,
        }
    }
}

#[async_trait::async_trait]
impl WalletServiceTrait for WalletService {
    async fn refresh_wallet(&self) -> Result<WalletView> {
        let snapshot = self.repository.fetch_wallet().await?;

        // A fresh authoritative snapshot supersedes every pending delta:
        // whatever the backend accepted is already reflected in it.
        self.pending.reconcile();

        debug!(
            "Wallet refreshed: {} eggs at rate {}",
            snapshot.egg_balance, snapshot.egg_rate
        );

        let effective_egg_balance = self.pending.apply(snapshot.egg_balance);
        Ok(WalletView {
            snapshot,
            effective_egg_balance,
        })
    }
}
