//! Market repository and service traits.

use async_trait::async_trait;

use super::market_model::BuyScreen;
use crate::errors::Result;

/// Trait defining the contract for market reads.
#[async_trait]
pub trait MarketRepositoryTrait: Send + Sync {
    /// Fetches packages plus deposit accounts in one call.
    async fn fetch_buy_screen(&self) -> Result<BuyScreen>;
}

/// Trait defining the contract for market service operations.
#[async_trait]
pub trait MarketServiceTrait: Send + Sync {
    /// Loads the buy screen for one view activation.
    async fn load_buy_screen(&self) -> Result<BuyScreen>;
}
