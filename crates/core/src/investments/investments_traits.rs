//! Investment repository and service traits.
//!
//! These traits define the contract for investment reads without any
//! transport-specific types, allowing for different backend adapters.

use async_trait::async_trait;

use super::investments_model::ActiveInvestment;
use crate::errors::Result;

/// Trait defining the contract for investment repository operations.
///
/// This is the single external capability the reward view consumes:
/// "list active investments for the current authenticated identity".
/// Identity is implicit in the adapter's session; no input is required.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Lists active investments in creation order.
    ///
    /// The caller must not re-sort the result; the backend's insertion
    /// order is the display order.
    async fn list_active_investments(&self) -> Result<Vec<ActiveInvestment>>;
}

/// Trait defining the contract for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Fetches the investment snapshot for one view activation.
    ///
    /// Fetch failure degrades to an empty list: absence of data is
    /// indistinguishable from no active investments.
    async fn load_snapshot(&self) -> Vec<ActiveInvestment>;
}
