//! Remote adapter for active investments.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::investments::{ActiveInvestment, InvestmentRepositoryTrait};

use crate::client::RemoteClient;

/// Fetches active investments through the `get_user_investments` RPC.
pub struct RemoteInvestmentRepository {
    client: RemoteClient,
}

impl RemoteInvestmentRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

/// Wire shape of one investment row as the backend returns it.
#[derive(Debug, Deserialize)]
struct InvestmentRow {
    id: String,
    package_name: String,
    daily_profit: u32,
    /// Left as raw text; garbage timestamps must not fail the fetch.
    next_reward_at: Option<String>,
    end_date: Option<String>,
}

impl From<InvestmentRow> for ActiveInvestment {
    fn from(row: InvestmentRow) -> Self {
        ActiveInvestment {
            id: row.id,
            package_label: row.package_name,
            daily_yield: row.daily_profit,
            next_reward_at: row.next_reward_at.unwrap_or_default(),
            ends_at: row.end_date.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for RemoteInvestmentRepository {
    async fn list_active_investments(&self) -> Result<Vec<ActiveInvestment>> {
        let rows: Vec<InvestmentRow> =
            self.client.rpc("get_user_investments", &json!({})).await?;
        Ok(rows.into_iter().map(ActiveInvestment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_investment_keeping_raw_timestamps() {
        let row: InvestmentRow = serde_json::from_value(json!({
            "id": "inv-1",
            "package_name": "Golden Hen",
            "daily_profit": 25,
            "next_reward_at": "not-a-timestamp",
            "end_date": "2026-10-01T00:00:00Z",
        }))
        .unwrap();

        let inv = ActiveInvestment::from(row);
        assert_eq!(inv.package_label, "Golden Hen");
        assert_eq!(inv.next_reward_at, "not-a-timestamp");
        assert!(inv.next_reward_instant().is_none());
    }

    #[test]
    fn null_timestamps_become_empty_strings() {
        let row: InvestmentRow = serde_json::from_value(json!({
            "id": "inv-2",
            "package_name": "Starter Hen",
            "daily_profit": 5,
            "next_reward_at": null,
            "end_date": null,
        }))
        .unwrap();

        let inv = ActiveInvestment::from(row);
        assert!(inv.next_reward_at.is_empty());
        assert!(inv.next_reward_instant().is_none());
    }
}
