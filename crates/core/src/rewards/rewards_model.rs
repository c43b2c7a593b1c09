//! Render output models for the reward view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::countdown::{countdown_for, CountdownState};
use super::progress::ProgressSweep;
use crate::investments::ActiveInvestment;

/// One rendered reward card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardCard {
    pub investment_id: String,
    /// Short batch reference (last four characters of the opaque id).
    pub batch_ref: String,
    pub package_label: String,
    /// Eggs produced per 24-hour cycle.
    pub daily_yield: u32,
    pub countdown: CountdownState,
    /// Decorative fill ratio in `[0, 1]`.
    pub progress: f64,
    /// Expiry timestamp as received from the backend.
    pub ends_at: String,
}

/// The full output of one render pass (one clock tick).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardFrame {
    pub cards: Vec<RewardCard>,
    pub generated_at: DateTime<Utc>,
}

impl RewardFrame {
    /// Empty-state frame holding no cards at all.
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            cards: Vec::new(),
            generated_at,
        }
    }

    /// Renders one frame for the snapshot at the given clock sample.
    ///
    /// Cards come out in snapshot order. A record with an unparseable
    /// `next_reward_at` renders the processing sentinel without
    /// affecting its siblings.
    pub fn render(
        investments: &[ActiveInvestment],
        sweep: ProgressSweep,
        now: DateTime<Utc>,
    ) -> Self {
        let cards = investments
            .iter()
            .map(|inv| RewardCard {
                investment_id: inv.id.clone(),
                batch_ref: inv.batch_ref(),
                package_label: inv.package_label.clone(),
                daily_yield: inv.daily_yield,
                countdown: countdown_for(inv, now),
                progress: sweep.ratio(now),
                ends_at: inv.ends_at.clone(),
            })
            .collect();

        Self {
            cards,
            generated_at: now,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn investment(id: &str, next_reward_at: &str) -> ActiveInvestment {
        ActiveInvestment {
            id: id.to_string(),
            package_label: "Bronze Flock".to_string(),
            daily_yield: 5,
            next_reward_at: next_reward_at.to_string(),
            ends_at: "2026-06-01T00:00:00Z".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn render_keeps_snapshot_order() {
        let snapshot = vec![
            investment("z-1", "2026-01-01T03:00:00Z"),
            investment("a-2", "2026-01-01T01:00:00Z"),
        ];
        let frame = RewardFrame::render(&snapshot, ProgressSweep::begin(now()), now());
        assert_eq!(frame.cards.len(), 2);
        assert_eq!(frame.cards[0].investment_id, "z-1");
        assert_eq!(frame.cards[1].investment_id, "a-2");
        assert_eq!(frame.cards[0].batch_ref, "z-1");
    }

    #[test]
    fn malformed_record_does_not_poison_siblings() {
        let snapshot = vec![
            investment("ok-1", "2026-01-01T05:07:09Z"),
            investment("bad-2", "???"),
            investment("ok-3", "2026-01-01T00:30:00Z"),
        ];
        let frame = RewardFrame::render(&snapshot, ProgressSweep::begin(now()), now());

        assert_eq!(frame.cards[0].countdown.to_string(), "05:07:09");
        assert!(frame.cards[1].countdown.is_processing());
        assert_eq!(frame.cards[2].countdown.to_string(), "00:30:00");
    }

    #[test]
    fn empty_snapshot_renders_empty_frame() {
        let frame = RewardFrame::render(&[], ProgressSweep::begin(now()), now());
        assert!(frame.is_empty());
        assert_eq!(frame.generated_at, now());
    }
}
