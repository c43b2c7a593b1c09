//! Remote adapter for sell (cashout) requests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::market::PaymentMethod;
use hencoop_core::purchases::RequestStatus;
use hencoop_core::sells::{
    Buyer, NewSellRequest, SellRepositoryTrait, SellRequest, SellScreen,
};

use crate::client::RemoteClient;

const TABLE: &str = "sell_requests";

/// Submits sells through the `submit_sell_request` RPC and reviews them
/// through the `sell_requests` table.
pub struct RemoteSellRepository {
    client: RemoteClient,
}

impl RemoteSellRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SellScreenPayload {
    #[serde(default)]
    buyers: Vec<BuyerRow>,
    my_eggs: u64,
}

#[derive(Debug, Deserialize)]
struct BuyerRow {
    id: String,
    name: String,
    rate: Decimal,
    #[serde(default)]
    is_verified: bool,
    #[serde(default)]
    rating: f64,
    #[serde(default)]
    completion_rate: u32,
    min_limit: u64,
    max_limit: u64,
    time_limit: String,
    #[serde(default)]
    methods: Vec<PaymentMethod>,
    tag: Option<String>,
}

impl From<BuyerRow> for Buyer {
    fn from(row: BuyerRow) -> Self {
        Buyer {
            id: row.id,
            name: row.name,
            rate: row.rate,
            is_verified: row.is_verified,
            rating: row.rating,
            completion_rate: row.completion_rate,
            min_limit: row.min_limit,
            max_limit: row.max_limit,
            time_limit: row.time_limit,
            methods: row.methods,
            tag: row.tag,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SellRow {
    id: String,
    user_name: String,
    quantity: u64,
    total_amount: Decimal,
    wallet_name: String,
    wallet_number: String,
    method: PaymentMethod,
    status: RequestStatus,
    created_at: Option<String>,
}

impl From<SellRow> for SellRequest {
    fn from(row: SellRow) -> Self {
        SellRequest {
            id: row.id,
            user_name: row.user_name,
            quantity: row.quantity,
            total_amount: row.total_amount,
            wallet_name: row.wallet_name,
            wallet_number: row.wallet_number,
            method: row.method,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl SellRepositoryTrait for RemoteSellRepository {
    async fn fetch_sell_screen(&self) -> Result<SellScreen> {
        let payload: SellScreenPayload =
            self.client.rpc("get_sell_screen_data", &json!({})).await?;
        Ok(SellScreen {
            buyers: payload.buyers.into_iter().map(Buyer::from).collect(),
            my_eggs: payload.my_eggs,
        })
    }

    async fn submit_sell(&self, request: NewSellRequest) -> Result<()> {
        // The RPC re-checks the balance server-side before inserting.
        let _: serde_json::Value = self
            .client
            .rpc(
                "submit_sell_request",
                &json!({
                    "p_quantity": request.quantity,
                    "p_buyer_name": request.buyer_name,
                    "p_rate": request.rate,
                    "p_total_amount": request.total_amount,
                    "p_wallet_name": request.wallet_name,
                    "p_wallet_number": request.wallet_number,
                    "p_method": request.method.as_str(),
                }),
            )
            .await?;
        Ok(())
    }

    async fn list_by_status(&self, status: RequestStatus) -> Result<Vec<SellRequest>> {
        let rows: Vec<SellRow> = self
            .client
            .rpc(
                "get_admin_sell_requests",
                &json!({ "p_status": status.as_str() }),
            )
            .await?;
        Ok(rows.into_iter().map(SellRequest::from).collect())
    }

    async fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<()> {
        self.client
            .patch(
                TABLE,
                &format!("id=eq.{request_id}"),
                &json!({ "status": status.as_str() }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sell_screen_payload_decodes_buyers() {
        let payload: SellScreenPayload = serde_json::from_value(json!({
            "buyers": [{
                "id": "b1",
                "name": "Ali Traders",
                "rate": 26.5,
                "is_verified": true,
                "rating": 4.9,
                "completion_rate": 98,
                "min_limit": 10,
                "max_limit": 5000,
                "time_limit": "15 min",
                "methods": ["Ubank", "EasyPaisa"],
                "tag": "Top Buyer",
            }],
            "my_eggs": 120,
        }))
        .unwrap();

        let buyer = Buyer::from(payload.buyers.into_iter().next().unwrap());
        assert_eq!(buyer.rate, dec!(26.5));
        assert_eq!(buyer.methods.len(), 2);
        assert_eq!(buyer.tag.as_deref(), Some("Top Buyer"));
    }

    #[test]
    fn sell_row_decodes_admin_shape() {
        let row: SellRow = serde_json::from_value(json!({
            "id": "s1",
            "user_name": "hamza12",
            "quantity": 20,
            "total_amount": 500,
            "wallet_name": "Hamza K.",
            "wallet_number": "03001234567",
            "method": "EasyPaisa",
            "status": "approved",
            "created_at": null,
        }))
        .unwrap();

        let request = SellRequest::from(row);
        assert_eq!(request.quantity, 20);
        assert_eq!(request.status, RequestStatus::Approved);
    }
}
