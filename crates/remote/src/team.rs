//! Remote adapter for the referral team.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use hencoop_core::errors::Result;
use hencoop_core::team::{MemberStatus, TeamMember, TeamRepositoryTrait, TeamSummary};

use crate::client::RemoteClient;

/// Fetches the referral summary through the `get_team_data` RPC.
pub struct RemoteTeamRepository {
    client: RemoteClient,
}

impl RemoteTeamRepository {
    pub fn new(client: RemoteClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct TeamPayload {
    username: String,
    total_commission: Decimal,
    direct_count: u32,
    #[serde(default)]
    members: Vec<MemberRow>,
}

#[derive(Debug, Deserialize)]
struct MemberRow {
    id: String,
    name: String,
    status: MemberStatus,
    profit: Decimal,
}

impl From<TeamPayload> for TeamSummary {
    fn from(payload: TeamPayload) -> Self {
        TeamSummary {
            username: payload.username,
            total_commission: payload.total_commission,
            direct_count: payload.direct_count,
            members: payload
                .members
                .into_iter()
                .map(|row| TeamMember {
                    id: row.id,
                    name: row.name,
                    status: row.status,
                    profit: row.profit,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl TeamRepositoryTrait for RemoteTeamRepository {
    async fn fetch_team(&self) -> Result<TeamSummary> {
        let payload: TeamPayload = self.client.rpc("get_team_data", &json!({})).await?;
        Ok(payload.into())
    }
}
