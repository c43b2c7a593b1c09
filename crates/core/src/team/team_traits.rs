//! Team repository and service traits.

use async_trait::async_trait;

use super::team_model::TeamSummary;
use crate::errors::Result;

/// Trait defining the contract for referral team reads.
#[async_trait]
pub trait TeamRepositoryTrait: Send + Sync {
    /// Fetches the referral summary for the current identity.
    async fn fetch_team(&self) -> Result<TeamSummary>;
}

/// Trait defining the contract for team service operations.
#[async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn load_team(&self) -> Result<TeamSummary>;
}
