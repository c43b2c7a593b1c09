//! Owned 1-second tick driving the reward view.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

use super::progress::ProgressSweep;
use super::rewards_model::RewardFrame;
use crate::constants::TICK_INTERVAL_SECS;
use crate::investments::ActiveInvestment;
use crate::utils::time_utils::Clock;

/// Owned timer resource for the reward view.
///
/// Mounting takes the investment snapshot (written once, read by every
/// tick) and spawns a task that re-samples the clock each second and
/// publishes a freshly rendered [`RewardFrame`] on a watch channel. The
/// task is tied to the ticker's lifetime: dropping the ticker aborts it
/// on every exit path, so no recurring timer outlives the view.
///
/// The ticker never talks to the backend; a reward that fires server-side
/// while the view is open only shows up after the next activation.
pub struct RewardTicker {
    frames: watch::Receiver<RewardFrame>,
    task: JoinHandle<()>,
}

impl RewardTicker {
    /// Mounts the view: renders an immediate first frame and starts the
    /// recurring tick.
    pub fn mount(snapshot: Vec<ActiveInvestment>, clock: Arc<dyn Clock>) -> Self {
        let mounted_at = clock.now();
        let sweep = ProgressSweep::begin(mounted_at);
        let snapshot = Arc::new(snapshot);

        let (tx, frames) = watch::channel(RewardFrame::render(&snapshot, sweep, mounted_at));

        let task_snapshot = Arc::clone(&snapshot);
        let task = tokio::spawn(async move {
            let mut tick = interval(Duration::from_secs(TICK_INTERVAL_SECS));
            // The first interval tick completes immediately; the mount
            // frame already covers it.
            tick.tick().await;

            loop {
                tick.tick().await;
                let now = clock.now();
                let frame = if task_snapshot.is_empty() {
                    RewardFrame::empty(now)
                } else {
                    RewardFrame::render(&task_snapshot, sweep, now)
                };
                if tx.send(frame).is_err() {
                    debug!("All reward frame receivers dropped, stopping tick");
                    break;
                }
            }
        });

        Self { frames, task }
    }

    /// Subscribes to rendered frames. The receiver always holds the most
    /// recent frame; slow consumers skip intermediate ones.
    pub fn subscribe(&self) -> watch::Receiver<RewardFrame> {
        self.frames.clone()
    }

    /// Latest rendered frame.
    pub fn current_frame(&self) -> RewardFrame {
        self.frames.borrow().clone()
    }

    /// Tears the view down explicitly. Equivalent to dropping the ticker.
    pub fn unmount(self) {
        // Drop impl aborts the task.
    }
}

impl Drop for RewardTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
    use std::sync::Mutex;

    /// Test double clock advanced manually alongside tokio's paused time.
    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(now),
            })
        }

        fn advance_secs(&self, secs: i64) {
            let mut guard = self.now.lock().unwrap();
            *guard += ChronoDuration::seconds(secs);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn base_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    fn investment(next_reward_at: &str) -> ActiveInvestment {
        ActiveInvestment {
            id: "inv-1".to_string(),
            package_label: "Starter Hen".to_string(),
            daily_yield: 1,
            next_reward_at: next_reward_at.to_string(),
            ends_at: "2026-06-01T00:00:00Z".to_string(),
        }
    }

    async fn step_one_second(clock: &ManualClock) {
        clock.advance_secs(1);
        tokio::time::advance(std::time::Duration::from_secs(1)).await;
        // Let the spawned tick task run.
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn mount_publishes_immediate_frame() {
        let clock = ManualClock::starting_at(base_now());
        let ticker = RewardTicker::mount(
            vec![investment("2026-01-01T05:07:09Z")],
            clock.clone(),
        );

        let frame = ticker.current_frame();
        assert_eq!(frame.cards.len(), 1);
        assert_eq!(frame.cards[0].countdown.to_string(), "05:07:09");
    }

    #[tokio::test(start_paused = true)]
    async fn tick_recomputes_every_second() {
        let clock = ManualClock::starting_at(base_now());
        let ticker = RewardTicker::mount(
            vec![investment("2026-01-01T00:00:10Z")],
            clock.clone(),
        );
        let mut frames = ticker.subscribe();

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        assert_eq!(
            frames.borrow_and_update().cards[0].countdown.to_string(),
            "00:00:09"
        );

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        assert_eq!(
            frames.borrow_and_update().cards[0].countdown.to_string(),
            "00:00:08"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_reaches_processing_when_due() {
        let clock = ManualClock::starting_at(base_now());
        let ticker = RewardTicker::mount(
            vec![investment("2026-01-01T00:00:02Z")],
            clock.clone(),
        );
        let mut frames = ticker.subscribe();

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        assert_eq!(
            frames.borrow_and_update().cards[0].countdown.to_string(),
            "00:00:01"
        );

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        assert!(frames.borrow_and_update().cards[0].countdown.is_processing());
    }

    #[tokio::test(start_paused = true)]
    async fn empty_snapshot_yields_empty_frames() {
        let clock = ManualClock::starting_at(base_now());
        let ticker = RewardTicker::mount(Vec::new(), clock.clone());
        let mut frames = ticker.subscribe();

        assert!(ticker.current_frame().is_empty());

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        assert!(frames.borrow_and_update().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_all_tick_work() {
        let clock = ManualClock::starting_at(base_now());
        let ticker = RewardTicker::mount(
            vec![investment("2026-01-01T01:00:00Z")],
            clock.clone(),
        );
        let mut frames = ticker.subscribe();

        step_one_second(&clock).await;
        frames.changed().await.unwrap();
        frames.borrow_and_update();

        ticker.unmount();
        tokio::task::yield_now().await;

        // Once torn down, advancing time produces no further frames.
        for _ in 0..5 {
            step_one_second(&clock).await;
        }
        assert!(!frames.has_changed().unwrap_or(false));
    }
}
