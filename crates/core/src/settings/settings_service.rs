use log::info;
use std::sync::Arc;

use super::settings_model::RateSettings;
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink};

/// Service for admin rate and pricing settings.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl SettingsService {
    pub fn new(
        repository: Arc<dyn SettingsRepositoryTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait::async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn load_settings(&self) -> Result<RateSettings> {
        self.repository.fetch_settings().await
    }

    async fn update_settings(&self, settings: RateSettings) -> Result<()> {
        settings.validate()?;
        self.repository.update_settings(&settings).await?;
        info!("Platform rates updated, egg rate now {}", settings.egg_rate);
        self.event_sink.emit(DomainEvent::RatesUpdated);
        Ok(())
    }
}
