//! Remote adapter for hen purchase requests.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::market::PaymentMethod;
use hencoop_core::purchases::{
    NewPurchaseRequest, PurchaseRepositoryTrait, PurchaseRequest, RequestStatus,
};

use crate::client::RemoteClient;

const TABLE: &str = "hen_purchase_requests";

/// Persists purchase requests in the `hen_purchase_requests` table and
/// lists them through the `get_admin_deposit_requests` RPC.
pub struct RemotePurchaseRepository {
    client: RemoteClient,
}

impl RemotePurchaseRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct NewPurchaseRow<'a> {
    package_id: &'a str,
    amount: Decimal,
    method: &'static str,
    trx_id: &'a str,
}

#[derive(Debug, Serialize)]
struct StatusPatch {
    status: &'static str,
}

#[derive(Debug, Deserialize)]
struct PurchaseRow {
    id: String,
    user_name: String,
    package_name: String,
    amount: Decimal,
    method: PaymentMethod,
    trx_id: String,
    status: RequestStatus,
    created_at: Option<String>,
}

impl From<PurchaseRow> for PurchaseRequest {
    fn from(row: PurchaseRow) -> Self {
        PurchaseRequest {
            id: row.id,
            user_name: row.user_name,
            package_name: row.package_name,
            amount: row.amount,
            method: row.method,
            trx_id: row.trx_id,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PurchaseRepositoryTrait for RemotePurchaseRepository {
    async fn submit(&self, request: NewPurchaseRequest) -> Result<()> {
        let row = NewPurchaseRow {
            package_id: &request.package_id,
            amount: request.amount,
            method: request.method.as_str(),
            trx_id: &request.trx_id,
        };
        self.client.insert(TABLE, &row).await
    }

    async fn list_by_status(&self, status: RequestStatus) -> Result<Vec<PurchaseRequest>> {
        let rows: Vec<PurchaseRow> = self
            .client
            .rpc(
                "get_admin_deposit_requests",
                &json!({ "p_status": status.as_str() }),
            )
            .await?;
        Ok(rows.into_iter().map(PurchaseRequest::from).collect())
    }

    async fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<()> {
        let patch = StatusPatch {
            status: status.as_str(),
        };
        self.client
            .patch(TABLE, &format!("id=eq.{request_id}"), &patch)
            .await
    }
}
