use log::debug;
use std::sync::Arc;

use super::team_model::TeamSummary;
use super::team_traits::{TeamRepositoryTrait, TeamServiceTrait};
use crate::errors::Result;

/// Service for the referral team screen.
pub struct TeamService {
    repository: Arc<dyn TeamRepositoryTrait>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn TeamRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TeamServiceTrait for TeamService {
    async fn load_team(&self) -> Result<TeamSummary> {
        let summary = self.repository.fetch_team().await?;
        debug!(
            "Loaded team for {}: {} direct referrals",
            summary.username, summary.direct_count
        );
        Ok(summary)
    }
}
