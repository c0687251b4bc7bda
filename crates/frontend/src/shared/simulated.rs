//! Browser timers for the simulated operations.

use contracts::shared::simulated_task::{CancelToken, SimulatedTask, TaskOutcome};
use gloo_timers::future::TimeoutFuture;

pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}

/// Runs a simulated task on the browser event loop.
pub async fn run_task<T>(
    task: SimulatedTask,
    token: &CancelToken,
    produce: impl FnOnce() -> Result<T, String>,
) -> TaskOutcome<T> {
    task.run(|ms| TimeoutFuture::new(ms), token, produce).await
}
