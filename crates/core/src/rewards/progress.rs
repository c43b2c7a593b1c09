//! Decorative progress sweep for reward cards.

use chrono::{DateTime, Duration, Utc};

use crate::constants::REWARD_CYCLE_HOURS;

/// Linear fill advancing from empty to full over a fixed 24-hour span,
/// keyed to the moment the view was mounted.
///
/// This intentionally does not track the actual elapsed fraction since
/// the last reward: it is a period animation, not a cycle indicator.
/// The countdown text is the accurate signal.
#[derive(Debug, Clone, Copy)]
pub struct ProgressSweep {
    mounted_at: DateTime<Utc>,
}

impl ProgressSweep {
    /// Starts a sweep at the view's mount instant.
    pub fn begin(mounted_at: DateTime<Utc>) -> Self {
        Self { mounted_at }
    }

    /// Fill ratio at `now`, clamped to `[0, 1]`.
    pub fn ratio(&self, now: DateTime<Utc>) -> f64 {
        let span = Duration::hours(REWARD_CYCLE_HOURS);
        let elapsed = now.signed_duration_since(self.mounted_at);
        let ratio = elapsed.num_milliseconds() as f64 / span.num_milliseconds() as f64;
        ratio.clamp(0.0, 1.0)
    }
}
