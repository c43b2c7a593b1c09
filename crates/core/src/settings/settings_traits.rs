//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::RateSettings;
use crate::errors::Result;

/// Trait defining the contract for rate settings persistence,
/// implemented by the remote adapter.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches current platform rates and accounts.
    async fn fetch_settings(&self) -> Result<RateSettings>;

    /// Persists updated rates and accounts (admin).
    async fn update_settings(&self, settings: &RateSettings) -> Result<()>;
}

/// Trait defining the contract for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    async fn load_settings(&self) -> Result<RateSettings>;

    /// Validates and persists updated rates (admin).
    async fn update_settings(&self, settings: RateSettings) -> Result<()>;
}
