/// Length of one reward cycle in hours. Each active hen lays one batch of
/// eggs per cycle; the backend assigns the next credit timestamp on this
/// cadence.
pub const REWARD_CYCLE_HOURS: i64 = 24;

/// Display value substituted when a countdown target is non-future or
/// invalid. Signals that the reward is due but not yet reflected in the
/// fetched snapshot.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Cadence of the reward view clock tick, in seconds.
pub const TICK_INTERVAL_SECS: u64 = 1;
