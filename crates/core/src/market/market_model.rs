//! Market domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Visual tier of a hen package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    #[default]
    Standard,
    Gold,
    Diamond,
}

/// Payment rails accepted for deposits and payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Ubank,
    EasyPaisa,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Ubank => "Ubank",
            PaymentMethod::EasyPaisa => "EasyPaisa",
        }
    }
}

/// A purchasable hen package (investment tier).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HenPackage {
    pub id: String,
    pub name: String,
    pub tier: PackageTier,
    /// Purchase price in PKR.
    pub price: Decimal,
    /// Daily profit in PKR used for marketing copy.
    pub daily_profit: Decimal,
    /// Lifespan of the investment in days.
    pub duration_days: u32,
    /// Pre-rendered ROI blurb from the backend.
    pub roi_text: Option<String>,
    pub is_hot: bool,
}

/// The admin's receiving account numbers shown on the payment sheet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepositAccounts {
    pub ubank_number: Option<String>,
    pub easypaisa_number: Option<String>,
}

impl DepositAccounts {
    /// Receiving number for the chosen payment method, if configured.
    pub fn number_for(&self, method: PaymentMethod) -> Option<&str> {
        match method {
            PaymentMethod::Ubank => self.ubank_number.as_deref(),
            PaymentMethod::EasyPaisa => self.easypaisa_number.as_deref(),
        }
    }
}

/// Everything the buy screen needs, returned by one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BuyScreen {
    pub packages: Vec<HenPackage>,
    pub accounts: DepositAccounts,
}
