//! Awaiting deferred results from async code

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use super::result::DeferredResult;
use crate::error::{DeferredError, Result};
use crate::outcome::Outcome;

/// Future for one run of a [`DeferredResult`]
///
/// Created by [`DeferredResult::outcome`] or by `.await`ing a deferred result.
/// The run is started when the future is created, not when it is first
/// polled. It resolves to the run's outcome, or to
/// [`DeferredError::Abandoned`] if the operation dropped its completion.
#[must_use = "the run has started; dropping this future discards its outcome"]
pub struct DeferredFuture<T, E> {
    receiver: oneshot::Receiver<Outcome<T, E>>,
}

impl<T, E> Future for DeferredFuture<T, E> {
    type Output = Result<Outcome<T, E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(Ok(outcome)),
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(Err(DeferredError::Abandoned)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, E> DeferredResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Starts a run and returns a future resolving to its outcome.
    ///
    /// ```rust
    /// use deferred_outcome::{DeferredResult, Outcome};
    ///
    /// let deferred = DeferredResult::<u32, String>::from_value(15).map(|n| n + 1);
    /// let outcome = futures::executor::block_on(deferred.outcome());
    /// assert_eq!(outcome, Ok(Outcome::Success(16)));
    /// ```
    pub fn outcome(&self) -> DeferredFuture<T, E> {
        let (tx, rx) = oneshot::channel();
        self.start(move |outcome| {
            let _ = tx.send(outcome);
        });
        DeferredFuture { receiver: rx }
    }
}

impl<T, E> IntoFuture for DeferredResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    type Output = Result<Outcome<T, E>>;
    type IntoFuture = DeferredFuture<T, E>;

    fn into_future(self) -> Self::IntoFuture {
        self.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_outcome_resolves() {
        let deferred = DeferredResult::<u32, &'static str>::from_error("failed");
        assert_eq!(block_on(deferred.outcome()), Ok(Outcome::Failure("failed")));
    }

    #[test]
    fn test_dropped_completion_is_abandoned() {
        let deferred = DeferredResult::<u32, ()>::of(drop);
        assert_eq!(block_on(deferred.outcome()), Err(DeferredError::Abandoned));
    }

    #[test]
    fn test_await_through_into_future() {
        let deferred = DeferredResult::<u32, ()>::from_value(2).map(|n| n * 21);
        let outcome = block_on(async move { deferred.await });
        assert_eq!(outcome, Ok(Outcome::Success(42)));
    }
}
