//! Wallet domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a wallet transaction row.
///
/// The backend may add kinds over time; an unrecognized value decodes
/// to [`TransactionKind::Unknown`] so one exotic row cannot fail the
/// whole wallet fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Funds in (a credited deposit).
    Deposit,
    /// Funds out (an approved sell/cashout).
    Withdrawal,
    /// Reward credit from the accrual process.
    Profit,
    /// A hen package purchase.
    Purchase,
    /// Commission credited for a referred member.
    ReferralBonus,
    /// Any kind this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Backend approval status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Rejected,
}

/// One row of the wallet history, rendered verbatim from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub status: TransactionStatus,
    /// Timestamp as received; display-only.
    pub date: Option<String>,
}

/// History filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    #[default]
    All,
    Deposits,
    Withdrawals,
    Profits,
    Purchases,
    ReferralBonuses,
}

impl TransactionFilter {
    /// Whether the row belongs on this tab. Rows of an unknown kind
    /// appear under `All` only.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            TransactionFilter::All => true,
            TransactionFilter::Deposits => transaction.kind == TransactionKind::Deposit,
            TransactionFilter::Withdrawals => transaction.kind == TransactionKind::Withdrawal,
            TransactionFilter::Profits => transaction.kind == TransactionKind::Profit,
            TransactionFilter::Purchases => transaction.kind == TransactionKind::Purchase,
            TransactionFilter::ReferralBonuses => {
                transaction.kind == TransactionKind::ReferralBonus
            }
        }
    }
}

/// Authoritative wallet state as returned by one fetch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub username: String,
    pub full_name: Option<String>,
    /// Egg inventory held by the user.
    pub egg_balance: u64,
    /// Current egg selling rate in PKR.
    pub egg_rate: Decimal,
    pub transactions: Vec<Transaction>,
}

impl WalletSnapshot {
    /// PKR value of the egg inventory at the current rate.
    pub fn pkr_value(&self) -> Decimal {
        Decimal::from(self.egg_balance) * self.egg_rate
    }

    /// Transactions matching the given filter tab, in backend order.
    pub fn filtered_transactions(&self, filter: TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }
}

/// The wallet as rendered: the last authoritative snapshot with the
/// pending overlay already applied to the balance.
#[derive(Debug, Clone)]
pub struct WalletView {
    pub snapshot: WalletSnapshot,
    /// Egg balance after subtracting pending local debits.
    pub effective_egg_balance: u64,
}

impl WalletView {
    /// PKR value of the overlay-adjusted balance.
    pub fn effective_pkr_value(&self) -> Decimal {
        Decimal::from(self.effective_egg_balance) * self.snapshot.egg_rate
    }
}
