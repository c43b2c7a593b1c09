//! Referral team domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Activity state of a referred member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

/// One directly referred member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub status: MemberStatus,
    /// Commission earned from this member, in PKR.
    pub profit: Decimal,
}

/// The referral team screen in one fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub username: String,
    pub total_commission: Decimal,
    pub direct_count: u32,
    pub members: Vec<TeamMember>,
}

impl TeamSummary {
    /// Builds the shareable referral link for this user.
    pub fn referral_link(&self, origin: &str) -> String {
        format!("{}/register?ref={}", origin.trim_end_matches('/'), self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn referral_link_strips_trailing_slash() {
        let summary = TeamSummary {
            username: "hamza12".to_string(),
            total_commission: dec!(0),
            direct_count: 0,
            members: Vec::new(),
        };
        assert_eq!(
            summary.referral_link("https://hencoop.app/"),
            "https://hencoop.app/register?ref=hamza12"
        );
    }

    #[test]
    fn member_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&MemberStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
