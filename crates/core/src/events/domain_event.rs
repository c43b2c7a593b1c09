//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::purchases::RequestStatus;

/// Domain events emitted by core services after successful submissions.
///
/// These events represent facts about requests the user has issued.
/// Front-ends translate them into platform-specific feedback (toasts,
/// screen refreshes); push delivery itself is backend-owned.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A hen purchase request was submitted for verification.
    PurchaseSubmitted {
        package_id: String,
        amount: Decimal,
    },

    /// A sell/cashout request was submitted.
    SellSubmitted {
        quantity: u64,
        total_amount: Decimal,
    },

    /// An admin resolved a pending request.
    RequestResolved {
        request_id: String,
        status: RequestStatus,
    },

    /// The admin updated selling rate, package prices, or accounts.
    RatesUpdated,
}

impl DomainEvent {
    pub fn purchase_submitted(package_id: String, amount: Decimal) -> Self {
        Self::PurchaseSubmitted { package_id, amount }
    }

    pub fn sell_submitted(quantity: u64, total_amount: Decimal) -> Self {
        Self::SellSubmitted {
            quantity,
            total_amount,
        }
    }

    pub fn request_resolved(request_id: String, status: RequestStatus) -> Self {
        Self::RequestResolved { request_id, status }
    }
}
