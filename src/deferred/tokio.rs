//! Tokio-backed operations
//!
//! Each start spawns fresh work on the current Tokio runtime and completes the
//! run from that task. Outside a runtime, blocking work runs inline on the
//! caller's thread and async work fails with [`DeferredError::NoRuntime`].

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;

use super::completion::Completion;
use super::result::DeferredResult;
use crate::error::DeferredError;
use crate::outcome::Outcome;

impl<T, E> DeferredResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Spawns a new future from `factory` on every start.
    ///
    /// Started outside a Tokio runtime, the run completes with
    /// `Failure(DeferredError::NoRuntime.into())` and `factory` is not called.
    ///
    /// ```rust
    /// # #[tokio::main]
    /// # async fn main() {
    /// use deferred_outcome::{DeferredError, DeferredResult, Outcome};
    ///
    /// let deferred = DeferredResult::<u32, DeferredError>::spawn(|| async { Ok(15) });
    /// assert_eq!(deferred.await, Ok(Outcome::Success(15)));
    /// # }
    /// ```
    pub fn spawn<F, Fut>(factory: F) -> Self
    where
        E: From<DeferredError>,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::of(move |done: Completion<T, E>| match Handle::try_current() {
            Ok(handle) => {
                let future = factory();
                handle.spawn(async move { done.complete_with(future.await) });
            }
            Err(err) => {
                log::error!("cannot spawn a Tokio-backed deferred result outside a runtime: {err}");
                done.fail(DeferredError::NoRuntime.into());
            }
        })
    }

    /// Runs `operation` on Tokio's blocking pool on every start.
    ///
    /// Started outside a Tokio runtime, `operation` runs inline before
    /// `start` returns.
    pub fn spawn_blocking<F>(operation: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        let operation = Arc::new(operation);
        Self::of(move |done: Completion<T, E>| match Handle::try_current() {
            Ok(handle) => {
                let operation = Arc::clone(&operation);
                handle.spawn_blocking(move || done.complete(Outcome::from_fn(&*operation)));
            }
            Err(_) => {
                log::debug!("no Tokio runtime, running blocking operation inline");
                done.complete(Outcome::from_fn(&*operation));
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    enum JobError {
        #[error("job failed: {0}")]
        Failed(String),
        #[error(transparent)]
        Deferred(#[from] DeferredError),
    }

    #[tokio::test]
    async fn test_spawn_runs_on_runtime() {
        let deferred = DeferredResult::<u32, JobError>::spawn(|| async {
            tokio::task::yield_now().await;
            Err(JobError::Failed("boom".to_string()))
        });
        assert_eq!(
            deferred.await,
            Ok(Outcome::Failure(JobError::Failed("boom".to_string())))
        );
    }

    #[tokio::test]
    async fn test_spawn_blocking_reruns_per_start() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let deferred = DeferredResult::<usize, ()>::spawn_blocking(move || {
            Ok(counter.fetch_add(1, Ordering::SeqCst))
        });

        assert_eq!(deferred.outcome().await, Ok(Outcome::Success(0)));
        assert_eq!(deferred.outcome().await, Ok(Outcome::Success(1)));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_spawn_outside_runtime_fails_once() {
        let factory_calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&factory_calls);
        let deferred = DeferredResult::<u32, JobError>::spawn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(1) }
        });

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        deferred.start(move |outcome| sink.lock().push(outcome));

        assert_eq!(
            *seen.lock(),
            vec![Outcome::Failure(JobError::Deferred(DeferredError::NoRuntime))]
        );
        assert_eq!(factory_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_spawn_blocking_outside_runtime_runs_inline() {
        let deferred = DeferredResult::<u32, ()>::spawn_blocking(|| Ok(7)).map(|n| n * 2);

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        deferred.start(move |outcome| sink.lock().push(outcome));

        assert_eq!(*seen.lock(), vec![Outcome::Success(14)]);
    }
}
