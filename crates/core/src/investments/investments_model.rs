//! Investment domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::parse_timestamp;

/// Domain model representing one unit of purchased productive capacity
/// (a "hen batch") that is currently active.
///
/// All fields are server-assigned. `next_reward_at` follows a recurring
/// 24-hour cadence set by the backend's accrual process; the client never
/// mutates it, it only re-fetches. The timestamp is carried verbatim as
/// received and parsed at render time, so a malformed value degrades that
/// record alone instead of failing the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActiveInvestment {
    /// Opaque backend identifier.
    pub id: String,
    /// Display name of the purchased tier.
    pub package_label: String,
    /// Reward units (eggs) produced per full 24-hour cycle.
    pub daily_yield: u32,
    /// Server-assigned timestamp of the next reward credit, as received.
    pub next_reward_at: String,
    /// Timestamp after which the investment is no longer active, as received.
    pub ends_at: String,
}

impl ActiveInvestment {
    /// Parsed next-reward instant, or `None` when the raw value is
    /// malformed (the render path substitutes the processing sentinel).
    pub fn next_reward_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.next_reward_at)
    }

    /// Parsed expiry instant, if well-formed.
    pub fn ends_instant(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.ends_at)
    }

    /// Whether the investment has passed its lifecycle window at `now`.
    ///
    /// The backend enforces expiry; this only reflects it for display.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.ends_instant().map(|end| end <= now).unwrap_or(false)
    }

    /// Short batch reference shown on the card (last four characters of
    /// the opaque id). The id is opaque, so this walks characters rather
    /// than bytes.
    pub fn batch_ref(&self) -> String {
        let tail: Vec<char> = self.id.chars().rev().take(4).collect();
        tail.into_iter().rev().collect()
    }
}
