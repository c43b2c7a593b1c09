//! Sell (cashout) domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::PaymentMethod;
use crate::purchases::RequestStatus;
use crate::{errors::ValidationError, Error, Result};

/// A buyer listed on the sell screen.
///
/// Display metadata only; the actual transfer happens off-platform once
/// an admin approves the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub id: String,
    pub name: String,
    /// PKR offered per egg.
    pub rate: Decimal,
    pub is_verified: bool,
    pub rating: f64,
    /// Completion percentage, 0 to 100.
    pub completion_rate: u32,
    pub min_limit: u64,
    pub max_limit: u64,
    /// Payment window, e.g. "15 min".
    pub time_limit: String,
    pub methods: Vec<PaymentMethod>,
    /// Optional badge such as "Top Buyer".
    pub tag: Option<String>,
}

/// Everything the sell screen needs in one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellScreen {
    pub buyers: Vec<Buyer>,
    /// Authoritative egg balance at fetch time.
    pub my_eggs: u64,
}

/// Input model for submitting a sell request against a chosen buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSellRequest {
    /// Eggs to sell.
    pub quantity: u64,
    pub buyer_name: String,
    /// Rate locked at submission, in PKR per egg.
    pub rate: Decimal,
    /// Total payout, must equal quantity * rate.
    pub total_amount: Decimal,
    /// Account holder name for the payout.
    pub wallet_name: String,
    pub wallet_number: String,
    pub method: PaymentMethod,
}

impl NewSellRequest {
    /// Validates the sell submission.
    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sell quantity must be positive".to_string(),
            )));
        }
        if self.rate <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sell rate must be positive".to_string(),
            )));
        }
        let expected = Decimal::from(self.quantity) * self.rate;
        if self.total_amount != expected {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Total amount {} does not match quantity * rate ({})",
                self.total_amount, expected
            ))));
        }
        if self.buyer_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "buyerName".to_string(),
            )));
        }
        if self.wallet_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "walletName".to_string(),
            )));
        }
        if self.wallet_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "walletNumber".to_string(),
            )));
        }
        Ok(())
    }
}

/// A sell request row as listed on the admin withdrawals screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellRequest {
    pub id: String,
    pub user_name: String,
    pub quantity: u64,
    pub total_amount: Decimal,
    pub wallet_name: String,
    pub wallet_number: String,
    pub method: PaymentMethod,
    pub status: RequestStatus,
    /// Submission timestamp as received; display-only.
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> NewSellRequest {
        NewSellRequest {
            quantity: 20,
            buyer_name: "Ali Traders".to_string(),
            rate: dec!(25),
            total_amount: dec!(500),
            wallet_name: "Hamza K.".to_string(),
            wallet_number: "03001234567".to_string(),
            method: PaymentMethod::EasyPaisa,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut r = request();
        r.quantity = 0;
        r.total_amount = dec!(0);
        assert!(r.validate().is_err());
    }

    #[test]
    fn mismatched_total_rejected() {
        let mut r = request();
        r.total_amount = dec!(501);
        assert!(r.validate().is_err());
    }

    #[test]
    fn blank_payout_fields_rejected() {
        let mut r = request();
        r.wallet_number = " ".to_string();
        assert!(r.validate().is_err());
    }
}
