//! Simulated refresh delay.
//!
//! Refreshing has no data effect. It only holds the session's "is
//! refreshing" flag up for a fixed duration. The wait is behind a trait so
//! tests can complete it immediately.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

/// Hook that suspends for the length of a refresh.
#[async_trait]
pub trait RefreshDelay: Send + Sync {
    /// Wait until the refresh is considered finished
    async fn wait(&self);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    /// Create a delay of `duration`
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Create a delay from milliseconds
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for TokioDelay {
    fn default() -> Self {
        Self::from_millis(1500)
    }
}

#[async_trait]
impl RefreshDelay for TokioDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.duration).await;
    }
}

/// Completes at once
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateDelay;

#[async_trait]
impl RefreshDelay for ImmediateDelay {
    async fn wait(&self) {}
}

/// Run `delay` on a background task.
///
/// The returned receiver resolves once the wait finishes. There is no way to
/// cancel a refresh once spawned.
pub fn spawn_refresh(delay: Arc<dyn RefreshDelay>) -> oneshot::Receiver<()> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        delay.wait().await;
        let _ = tx.send(());
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_is_one_and_a_half_seconds() {
        assert_eq!(TokioDelay::default().duration(), Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_immediate_delay_completes() {
        ImmediateDelay.wait().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay::from_millis(1500).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_spawn_refresh_signals_completion() {
        let rx = spawn_refresh(Arc::new(ImmediateDelay));
        assert!(rx.await.is_ok());
    }
}
