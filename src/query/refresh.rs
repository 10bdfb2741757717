//! Background tasks tied to a view's lifetime.
//!
//! Both types abort their task when dropped, so unmounting a view (dropping
//! it) is enough to stop its fetches.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Owns a spawned one-off task and aborts it on drop.
#[derive(Debug)]
pub struct TaskGuard {
    handle: JoinHandle<()>,
}

impl TaskGuard {
    pub fn spawn<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Runs `job` immediately and then every `period` until cancelled.
///
/// Ticks that fall behind (slow fetch) are delayed rather than bunched up.
/// A failing job does not stop the schedule.
#[derive(Debug)]
pub struct RefreshTask {
    period: Duration,
    guard: TaskGuard,
}

impl RefreshTask {
    /// Start the schedule. `period` must be non-zero.
    pub fn spawn<F, Fut>(period: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let guard = TaskGuard::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                job().await;
            }
        });
        tracing::debug!(period_ms = period.as_millis() as u64, "Refresh task started");
        Self { period, guard }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Stop the schedule. Also happens on drop.
    pub fn cancel(&self) {
        self.guard.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.guard.is_finished()
    }
}
