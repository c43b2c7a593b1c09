//! Admin rate and pricing settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Platform-wide rates and deposit accounts editable by the admin.
///
/// Package prices apply to new purchases only; running investments keep
/// the price they were bought at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSettings {
    /// PKR paid per egg on cashout.
    pub egg_rate: Decimal,
    pub starter_hen_price: Decimal,
    pub bronze_hen_price: Decimal,
    pub golden_hen_price: Decimal,
    pub diamond_hen_price: Decimal,
    pub ubank_number: String,
    pub easypaisa_number: String,
}

impl RateSettings {
    /// Validates settings before they are pushed to the backend.
    pub fn validate(&self) -> Result<()> {
        let prices = [
            ("eggRate", self.egg_rate),
            ("starterHenPrice", self.starter_hen_price),
            ("bronzeHenPrice", self.bronze_hen_price),
            ("goldenHenPrice", self.golden_hen_price),
            ("diamondHenPrice", self.diamond_hen_price),
        ];
        for (field, value) in prices {
            if value <= Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "{field} must be positive"
                ))));
            }
        }
        if self.ubank_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "ubankNumber".to_string(),
            )));
        }
        if self.easypaisa_number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "easypaisaNumber".to_string(),
            )));
        }
        Ok(())
    }
}
