use log::debug;
use std::sync::Arc;

use super::market_model::BuyScreen;
use super::market_traits::{MarketRepositoryTrait, MarketServiceTrait};
use crate::errors::Result;

/// Service for the buy screen.
pub struct MarketService {
    repository: Arc<dyn MarketRepositoryTrait>,
}

impl MarketService {
    pub fn new(repository: Arc<dyn MarketRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl MarketServiceTrait for MarketService {
    async fn load_buy_screen(&self) -> Result<BuyScreen> {
        let screen = self.repository.fetch_buy_screen().await?;
        debug!("Loaded {} hen packages", screen.packages.len());
        Ok(screen)
    }
}
