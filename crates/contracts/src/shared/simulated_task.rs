//! Fake long-running operations: report generation, exports, ticket submission.
//!
//! The timer is injected so the same runner works with `gloo_timers` in the
//! browser and with a ready future in tests.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome<T> {
    Completed(T),
    Failed(String),
    Cancelled,
}

impl<T> TaskOutcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, TaskOutcome::Completed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTask {
    pub name: &'static str,
    pub delay_ms: u32,
}

impl SimulatedTask {
    pub const fn new(name: &'static str, delay_ms: u32) -> Self {
        Self { name, delay_ms }
    }

    /// Waits `delay_ms` using `sleep`, then runs `produce` unless the token
    /// was cancelled in the meantime.
    pub async fn run<S, Fut, T, P>(&self, sleep: S, token: &CancelToken, produce: P) -> TaskOutcome<T>
    where
        S: FnOnce(u32) -> Fut,
        Fut: Future<Output = ()>,
        P: FnOnce() -> Result<T, String>,
    {
        if token.is_cancelled() {
            log::debug!("{} cancelled before start", self.name);
            return TaskOutcome::Cancelled;
        }
        log::debug!("{} started ({} ms)", self.name, self.delay_ms);
        sleep(self.delay_ms).await;

        if token.is_cancelled() {
            log::info!("{} cancelled", self.name);
            return TaskOutcome::Cancelled;
        }
        match produce() {
            Ok(value) => {
                log::info!("{} completed", self.name);
                TaskOutcome::Completed(value)
            }
            Err(e) => {
                log::warn!("{} failed: {}", self.name, e);
                TaskOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;
    use std::cell::Cell;

    const TASK: SimulatedTask = SimulatedTask::new("Export", 1500);

    #[test]
    fn test_completes_after_delay() {
        let waited = Cell::new(0);
        let outcome = block_on(TASK.run(
            |ms| {
                waited.set(ms);
                ready(())
            },
            &CancelToken::new(),
            || Ok::<_, String>("report.pdf"),
        ));
        assert_eq!(outcome, TaskOutcome::Completed("report.pdf"));
        assert_eq!(waited.get(), 1500);
    }

    #[test]
    fn test_failure_is_reported() {
        let outcome: TaskOutcome<()> =
            block_on(TASK.run(|_| ready(()), &CancelToken::new(), || Err("disk full".to_string())));
        assert_eq!(outcome, TaskOutcome::Failed("disk full".into()));
    }

    #[test]
    fn test_cancel_during_wait_skips_produce() {
        let token = CancelToken::new();
        let produced = Cell::new(false);
        let outcome = block_on(TASK.run(
            |_| {
                token.clone().cancel();
                ready(())
            },
            &token,
            || {
                produced.set(true);
                Ok::<_, String>(())
            },
        ));
        assert_eq!(outcome, TaskOutcome::Cancelled);
        assert!(!produced.get());
    }

    #[test]
    fn test_cancelled_token_never_sleeps() {
        let token = CancelToken::new();
        token.cancel();
        let slept = Cell::new(false);
        let outcome = block_on(TASK.run(
            |_| {
                slept.set(true);
                ready(())
            },
            &token,
            || Ok::<_, String>(()),
        ));
        assert_eq!(outcome, TaskOutcome::Cancelled);
        assert!(!slept.get());
    }
}
