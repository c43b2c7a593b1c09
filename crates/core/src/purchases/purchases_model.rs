//! Purchase request domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::PaymentMethod;
use crate::{errors::ValidationError, Error, Result};

/// Approval status of a submitted request (purchase or sell).
///
/// Requests start pending; an admin moves them to approved or rejected.
/// The backend trigger that credits hens or transfers funds on approval
/// is out of scope here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
        }
    }
}

/// Input model for submitting a hen purchase.
///
/// The user pays out-of-band (bank transfer) and submits the transaction
/// reference here for manual verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPurchaseRequest {
    pub package_id: String,
    /// Package price at submission time, in PKR.
    pub amount: Decimal,
    pub method: PaymentMethod,
    /// Transaction reference from the payment rail.
    pub trx_id: String,
}

impl NewPurchaseRequest {
    /// Validates the purchase submission.
    pub fn validate(&self) -> Result<()> {
        if self.package_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "packageId".to_string(),
            )));
        }
        if self.trx_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "trxId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Purchase amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}

/// A purchase request row as listed on the admin deposits screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub id: String,
    pub user_name: String,
    pub package_name: String,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub trx_id: String,
    pub status: RequestStatus,
    /// Submission timestamp as received; display-only.
    pub created_at: Option<String>,
}
