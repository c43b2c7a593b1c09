//! Remote adapter for wallet reads.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::wallet::{
    Transaction, TransactionKind, TransactionStatus, WalletRepositoryTrait, WalletSnapshot,
};

use crate::client::RemoteClient;

/// Fetches wallet state through the `get_wallet_data` RPC.
pub struct RemoteWalletRepository {
    client: RemoteClient,
}

impl RemoteWalletRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct WalletPayload {
    username: String,
    full_name: Option<String>,
    egg_balance: u64,
    egg_rate: Decimal,
    #[serde(default)]
    transactions: Vec<TransactionRow>,
}

#[derive(Debug, Deserialize)]
struct TransactionRow {
    id: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Decimal,
    status: TransactionStatus,
    date: Option<String>,
}

impl From<WalletPayload> for WalletSnapshot {
    fn from(payload: WalletPayload) -> Self {
        WalletSnapshot {
            username: payload.username,
            full_name: payload.full_name,
            egg_balance: payload.egg_balance,
            egg_rate: payload.egg_rate,
            transactions: payload
                .transactions
                .into_iter()
                .map(|row| Transaction {
                    id: row.id,
                    kind: row.kind,
                    amount: row.amount,
                    status: row.status,
                    date: row.date,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl WalletRepositoryTrait for RemoteWalletRepository {
    async fn fetch_wallet(&self) -> Result<WalletSnapshot> {
        let payload: WalletPayload = self.client.rpc("get_wallet_data", &json!({})).await?;
        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn payload_decodes_with_lowercase_kinds() {
        let payload: WalletPayload = serde_json::from_value(json!({
            "username": "hamza12",
            "full_name": "Hamza K.",
            "egg_balance": 120,
            "egg_rate": 25.0,
            "transactions": [
                {"id": "t1", "type": "profit", "amount": 25.0, "status": "completed", "date": "2026-08-01"},
                {"id": "t2", "type": "withdrawal", "amount": 500.0, "status": "pending", "date": null},
            ],
        }))
        .unwrap();

        let snapshot = WalletSnapshot::from(payload);
        assert_eq!(snapshot.egg_balance, 120);
        assert_eq!(snapshot.egg_rate, dec!(25));
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.transactions[0].kind, TransactionKind::Profit);
        assert_eq!(snapshot.transactions[1].status, TransactionStatus::Pending);
    }

    #[test]
    fn exotic_transaction_kinds_do_not_fail_the_wallet_decode() {
        let payload: WalletPayload = serde_json::from_value(json!({
            "username": "hamza12",
            "full_name": "Hamza K.",
            "egg_balance": 120,
            "egg_rate": 25.0,
            "transactions": [
                {"id": "t1", "type": "purchase", "amount": 2500.0, "status": "completed", "date": null},
                {"id": "t2", "type": "referral_bonus", "amount": 50.0, "status": "completed", "date": null},
                {"id": "t3", "type": "cashback", "amount": 5.0, "status": "completed", "date": null},
            ],
        }))
        .unwrap();

        let snapshot = WalletSnapshot::from(payload);
        assert_eq!(snapshot.transactions.len(), 3);
        assert_eq!(snapshot.transactions[0].kind, TransactionKind::Purchase);
        assert_eq!(snapshot.transactions[1].kind, TransactionKind::ReferralBonus);
        assert_eq!(snapshot.transactions[2].kind, TransactionKind::Unknown);
    }

    #[test]
    fn missing_transactions_default_to_empty() {
        let payload: WalletPayload = serde_json::from_value(json!({
            "username": "hamza12",
            "full_name": "Hamza K.",
            "egg_balance": 0,
            "egg_rate": 25.0,
        }))
        .unwrap();
        assert!(payload.transactions.is_empty());
    }
}
