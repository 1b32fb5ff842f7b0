use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Handle to a running poll task. Cancelling (or dropping) the handle stops
/// the task; there is no graceful-shutdown protocol because each tick runs to
/// completion and holds no state between runs.
pub struct PollHandle {
    inner: JoinHandle<()>,
}

impl PollHandle {
    /// Stop the poll task.
    pub fn cancel(&self) {
        self.inner.abort();
    }

    /// Whether the task is still scheduled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.inner.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.inner.abort();
    }
}

/// Run `tick` immediately and then once per `period` until cancelled.
///
/// The immediate first run matches how the client uses this: project the
/// investment as soon as it exists, then keep the chart moving on a timer.
/// Missed ticks are skipped rather than bursted.
pub fn spawn_poller<F, Fut>(period: Duration, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let inner = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            tick().await;
        }
    });
    PollHandle { inner }
}
