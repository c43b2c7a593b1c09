use log::{debug, warn};
use std::sync::Arc;

use super::investments_model::ActiveInvestment;
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};

/// Service for reading the active-investment snapshot.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(repository: Arc<dyn InvestmentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvestmentServiceTrait for InvestmentService {
    /// Fetches the snapshot once per view activation.
    ///
    /// No retry, backoff or timeout of its own: a failed or slow fetch
    /// leaves the view in the empty state, and a reward that fires while
    /// the view stays open is only reflected on the next activation.
    async fn load_snapshot(&self) -> Vec<ActiveInvestment> {
        match self.repository.list_active_investments().await {
            Ok(investments) => {
                debug!("Loaded {} active investments", investments.len());
                investments
            }
            Err(e) => {
                warn!("Investment fetch failed, rendering empty state: {}", e);
                Vec::new()
            }
        }
    }
}
