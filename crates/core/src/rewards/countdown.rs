//! Countdown computation for the reward view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PROCESSING_LABEL;
use crate::investments::ActiveInvestment;

/// Rendered countdown for one investment at one clock sample.
///
/// A pure function of `(next_reward_at, now)`: computing it twice with the
/// same inputs yields identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CountdownState {
    /// Time left until the next reward credit, decomposed for display.
    /// Hours are taken modulo 24; every field is zero-padded to two digits.
    Remaining { hours: u8, minutes: u8, seconds: u8 },
    /// The reward is due but not yet reflected in the fetched snapshot
    /// (the backend has not run its accrual pass, or the record's
    /// timestamp was unparseable). Never a negative or zero countdown.
    Processing,
}

impl CountdownState {
    pub fn is_processing(&self) -> bool {
        matches!(self, CountdownState::Processing)
    }
}

impl fmt::Display for CountdownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountdownState::Remaining {
                hours,
                minutes,
                seconds,
            } => write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds),
            CountdownState::Processing => f.write_str(PROCESSING_LABEL),
        }
    }
}

/// Computes the countdown to `target` as seen at `now`.
///
/// `remaining <= 0` yields the processing sentinel; otherwise the
/// remaining duration is decomposed into hours (mod 24), minutes and
/// seconds, truncating sub-second remainder.
pub fn countdown(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownState {
    let remaining = target.signed_duration_since(now);
    let total_secs = remaining.num_seconds();
    if total_secs <= 0 {
        return CountdownState::Processing;
    }

    CountdownState::Remaining {
        hours: ((total_secs / 3600) % 24) as u8,
        minutes: ((total_secs / 60) % 60) as u8,
        seconds: (total_secs % 60) as u8,
    }
}

/// Countdown for one investment record, degrading a malformed
/// `next_reward_at` to the processing sentinel so that siblings in the
/// same list are unaffected.
pub fn countdown_for(investment: &ActiveInvestment, now: DateTime<Utc>) -> CountdownState {
    match investment.next_reward_instant() {
        Some(target) => countdown(target, now),
        None => CountdownState::Processing,
    }
}
