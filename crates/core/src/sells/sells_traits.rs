//! Sell repository and service traits.

use async_trait::async_trait;
use uuid::Uuid;

use super::sells_model::{NewSellRequest, SellRequest, SellScreen};
use crate::errors::Result;
use crate::purchases::RequestStatus;

/// Trait defining the contract for sell request persistence,
/// implemented by the remote adapter.
#[async_trait]
pub trait SellRepositoryTrait: Send + Sync {
    /// Fetches buyers plus the authoritative egg balance in one call.
    async fn fetch_sell_screen(&self) -> Result<SellScreen>;

    /// Submits a new sell request for the current identity.
    async fn submit_sell(&self, request: NewSellRequest) -> Result<()>;

    /// Lists sell requests in the given status (admin).
    async fn list_by_status(&self, status: RequestStatus) -> Result<Vec<SellRequest>>;

    /// Moves a request to the given status (admin).
    async fn set_status(&self, request_id: &str, status: RequestStatus) -> Result<()>;
}

/// Trait defining the contract for sell service operations.
#[async_trait]
pub trait SellServiceTrait: Send + Sync {
    /// Loads the sell screen with the pending overlay already applied
    /// to the egg balance.
    async fn load_sell_screen(&self) -> Result<SellScreen>;

    /// Validates the request against the overlay-adjusted balance,
    /// submits it, and records the debit locally. Returns the pending
    /// submission id.
    async fn submit_sell(&self, request: NewSellRequest) -> Result<Uuid>;

    /// Lists sell requests awaiting or past review (admin).
    async fn list_requests(&self, status: RequestStatus) -> Result<Vec<SellRequest>>;

    /// Approves a pending request (admin).
    async fn approve(&self, request_id: &str) -> Result<()>;

    /// Rejects a pending request (admin).
    async fn reject(&self, request_id: &str) -> Result<()>;
}
