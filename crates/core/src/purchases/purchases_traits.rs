//! Purchase repository and service traits.

use async_trait::async_trait;

use super::purchases_model::{NewPurchaseRequest, PurchaseRequest, RequestStatus};
use crate::errors::Result;

/// Trait defining the contract for purchase request persistence,
/// implemented by the remote adapter.
#[async_trait]
pub trait PurchaseRepositoryTrait: Send + Sync {
    /// Submits a new purchase request for the current identity.
    async fn submit(&self, request: NewPurchaseRequest) -> Result<()>;

    /// Lists purchase requests in the given status (admin).
    async fn list_by_status(&self, status: RequestStatus) -> Result<Vec<PurchaseRequest>>;

    /// Moves a request to the given status (admin). The backend trigger
    /// performs the actual crediting.
    async fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<()>;
}

/// Trait defining the contract for purchase service operations.
#[async_trait]
pub trait PurchaseServiceTrait: Send + Sync {
    /// Validates and submits a purchase request.
    async fn submit_purchase(&self, request: NewPurchaseRequest) -> Result<()>;

    /// Lists purchase requests awaiting or past review (admin).
    async fn list_requests(&self, status: RequestStatus) -> Result<Vec<PurchaseRequest>>;

    /// Approves a pending request (admin).
    async fn approve(&self, request_id: &str) -> Result<()>;

    /// Rejects a pending request (admin).
    async fn reject(&self, request_id: &str) -> Result<()>;
}
