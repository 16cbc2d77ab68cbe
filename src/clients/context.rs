//! Execution context for API calls.
//!
//! A [`Context`] carries an optional deadline and an optional cancellation
//! signal into a single request. Dropping the request future also aborts it;
//! the context covers the cases where the caller cannot own the future.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use crate::clients::errors::HttpError;

/// Deadline and cancellation carried by a request.
///
/// Clones share the same cancellation signal.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use bigcommerce_api::Context;
///
/// let ctx = Context::background().with_timeout(Duration::from_secs(10));
/// assert!(ctx.deadline().is_some());
///
/// let (ctx, handle) = Context::background().with_cancel();
/// handle.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancelled: Option<watch::Receiver<bool>>,
}

/// Cancels every [`Context`] derived from [`Context::with_cancel`].
#[derive(Debug)]
pub struct CancelHandle {
    sender: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signals cancellation. In-flight calls return [`HttpError::Cancelled`].
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

impl Context {
    /// A context with no deadline that is never cancelled.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a context whose deadline is `timeout` from now.
    ///
    /// An existing earlier deadline is kept.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Returns a context that expires at `deadline`.
    ///
    /// An existing earlier deadline is kept.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |d| d.min(deadline)));
        self
    }

    /// Returns a cancellable context and the handle that cancels it.
    #[must_use]
    pub fn with_cancel(mut self) -> (Self, CancelHandle) {
        let (sender, receiver) = watch::channel(false);
        self.cancelled = Some(receiver);
        (self, CancelHandle { sender })
    }

    /// Returns the deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` once the cancel handle has fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Drives `future` to completion unless the context is cancelled or its
    /// deadline passes first.
    ///
    /// When the context wins the race, `future` is dropped, which releases
    /// any connection it holds.
    pub(crate) async fn run<F>(&self, future: F) -> Result<F::Output, HttpError>
    where
        F: Future,
    {
        if self.is_cancelled() {
            return Err(HttpError::Cancelled);
        }
        if self.deadline.is_some_and(|d| d <= Instant::now()) {
            return Err(HttpError::DeadlineExceeded);
        }

        let deadline = async {
            match self.deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            output = future => Ok(output),
            () = deadline => Err(HttpError::DeadlineExceeded),
            () = self.wait_cancelled() => Err(HttpError::Cancelled),
        }
    }

    async fn wait_cancelled(&self) {
        let Some(mut receiver) = self.cancelled.clone() else {
            return std::future::pending().await;
        };
        loop {
            if *receiver.borrow_and_update() {
                return;
            }
            if receiver.changed().await.is_err() {
                // Handle dropped without cancelling.
                return std::future::pending().await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_is_not_cancelled() {
        let ctx = Context::background();
        assert!(!ctx.is_cancelled());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_clones_share_cancellation() {
        let (ctx, handle) = Context::background().with_cancel();
        let clone = ctx.clone();
        handle.cancel();
        assert!(ctx.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_earlier_deadline_is_kept() {
        let ctx = Context::background().with_timeout(Duration::from_secs(1));
        let first = ctx.deadline().unwrap();
        let ctx = ctx.with_timeout(Duration::from_secs(60));
        assert_eq!(ctx.deadline(), Some(first));
    }

    #[test]
    fn test_run_returns_output() {
        let ctx = Context::background().with_timeout(Duration::from_secs(5));
        let value = tokio_test::assert_ok!(tokio_test::block_on(ctx.run(async { 42 })));
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_run_refuses_cancelled_context() {
        let (ctx, handle) = Context::background().with_cancel();
        handle.cancel();
        let result = ctx.run(async { 1 }).await;
        assert!(matches!(result, Err(HttpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_aborts_on_cancel_during_call() {
        let (ctx, handle) = Context::background().with_cancel();
        let slow = tokio::time::sleep(Duration::from_secs(30));
        let (result, ()) = tokio::join!(ctx.run(slow), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.cancel();
        });
        assert!(matches!(result, Err(HttpError::Cancelled)));
    }

    #[tokio::test]
    async fn test_run_aborts_on_deadline() {
        let ctx = Context::background().with_timeout(Duration::from_millis(10));
        let result = ctx.run(tokio::time::sleep(Duration::from_secs(30))).await;
        assert!(matches!(result, Err(HttpError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_dropped_handle_never_cancels() {
        let (ctx, handle) = Context::background().with_cancel();
        drop(handle);
        let value = ctx.run(async { "done" }).await.unwrap();
        assert_eq!(value, "done");
    }
}
