//! Remote adapter for the buy screen.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::market::{
    BuyScreen, DepositAccounts, HenPackage, MarketRepositoryTrait, PackageTier,
};

use crate::client::RemoteClient;

/// Fetches packages and deposit accounts through `get_buy_screen_data`.
pub struct RemoteMarketRepository {
    client: RemoteClient,
}

impl RemoteMarketRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct BuyScreenPayload {
    #[serde(default)]
    packages: Vec<PackageRow>,
    ubank_number: Option<String>,
    easypaisa_number: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackageRow {
    id: String,
    name: String,
    #[serde(default)]
    tier: PackageTier,
    price: Decimal,
    daily_profit: Decimal,
    duration_days: u32,
    roi_text: Option<String>,
    #[serde(default)]
    is_hot: bool,
}

impl From<BuyScreenPayload> for BuyScreen {
    fn from(payload: BuyScreenPayload) -> Self {
        BuyScreen {
            packages: payload
                .packages
                .into_iter()
                .map(|row| HenPackage {
                    id: row.id,
                    name: row.name,
                    tier: row.tier,
                    price: row.price,
                    daily_profit: row.daily_profit,
                    duration_days: row.duration_days,
                    roi_text: row.roi_text,
                    is_hot: row.is_hot,
                })
                .collect(),
            accounts: DepositAccounts {
                ubank_number: payload.ubank_number,
                easypaisa_number: payload.easypaisa_number,
            },
        }
    }
}

#[async_trait]
impl MarketRepositoryTrait for RemoteMarketRepository {
    async fn fetch_buy_screen(&self) -> Result<BuyScreen> {
        let payload: BuyScreenPayload = self.client.rpc("get_buy_screen_data", &json!({})).await?;
        Ok(payload.into())
    }
}
