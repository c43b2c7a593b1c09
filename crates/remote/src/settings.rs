//! Remote adapter for admin rate settings.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::settings::{RateSettings, SettingsRepositoryTrait};

use crate::client::RemoteClient;

/// Reads platform settings and pushes updates through the
/// `update_admin_rates` RPC.
pub struct RemoteSettingsRepository {
    client: RemoteClient,
}

impl RemoteSettingsRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SettingsPayload {
    egg_rate: Decimal,
    starter_hen_price: Decimal,
    bronze_hen_price: Decimal,
    golden_hen_price: Decimal,
    diamond_hen_price: Decimal,
    ubank_number: String,
    easypaisa_number: String,
}

impl From<SettingsPayload> for RateSettings {
    fn from(payload: SettingsPayload) -> Self {
        RateSettings {
            egg_rate: payload.egg_rate,
            starter_hen_price: payload.starter_hen_price,
            bronze_hen_price: payload.bronze_hen_price,
            golden_hen_price: payload.golden_hen_price,
            diamond_hen_price: payload.diamond_hen_price,
            ubank_number: payload.ubank_number,
            easypaisa_number: payload.easypaisa_number,
        }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for RemoteSettingsRepository {
    async fn fetch_settings(&self) -> Result<RateSettings> {
        let payload: SettingsPayload = self
            .client
            .rpc("get_platform_settings", &json!({}))
            .await?;
        Ok(payload.into())
    }

    async fn update_settings(&self, settings: &RateSettings) -> Result<()> {
        let _: serde_json::Value = self
            .client
            .rpc(
                "update_admin_rates",
                &json!({
                    "p_egg_rate": settings.egg_rate,
                    "p_starter_hen_price": settings.starter_hen_price,
                    "p_bronze_hen_price": settings.bronze_hen_price,
                    "p_golden_hen_price": settings.golden_hen_price,
                    "p_diamond_hen_price": settings.diamond_hen_price,
                    "p_ubank_number": settings.ubank_number,
                    "p_easypaisa_number": settings.easypaisa_number,
                }),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn payload_maps_to_settings() {
        let payload: SettingsPayload = serde_json::from_value(json!({
            "egg_rate": 25,
            "starter_hen_price": 500,
            "bronze_hen_price": 1500,
            "golden_hen_price": 2500,
            "diamond_hen_price": 5000,
            "ubank_number": "1234567890",
            "easypaisa_number": "03001234567",
        }))
        .unwrap();

        let settings = RateSettings::from(payload);
        assert_eq!(settings.egg_rate, dec!(25));
        assert!(settings.validate().is_ok());
    }
}
