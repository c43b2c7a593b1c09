//! Reward countdown renderer.
//!
//! Given the active-investment snapshot and a clock sample, this module
//! produces a human-readable countdown and a progress ratio per record,
//! with no server round-trips between renders. The ticker re-samples the
//! clock once per second for as long as the view is visible.

mod countdown;
mod progress;
mod rewards_model;
mod ticker;

pub use countdown::{countdown, countdown_for, CountdownState};
pub use progress::ProgressSweep;
pub use rewards_model::{RewardCard, RewardFrame};
pub use ticker::RewardTicker;
