//! Single-start guard for callers that need exactly-once execution

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::result::DeferredResult;
use crate::error::{DeferredError, Result};
use crate::outcome::Outcome;

/// Lifecycle of a [`StartOnce`] handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StartState {
    /// `start` has not been called
    Unstarted,
    /// The operation is running and has not completed yet
    Started,
    /// The completion callback has fired
    Completed,
}

/// A deferred result that can be started only once
///
/// Plain [`DeferredResult`] values re-run their chain on every `start`.
/// `StartOnce` tracks its state explicitly and rejects a second start with
/// [`DeferredError::AlreadyStarted`], for operations whose side effects must
/// not be repeated.
///
/// ```rust
/// use deferred_outcome::{DeferredError, DeferredResult, StartState};
///
/// let once = DeferredResult::<u32, String>::from_value(1).once();
/// assert_eq!(once.start(|_| {}), Ok(()));
/// assert_eq!(once.state(), StartState::Completed);
/// assert_eq!(once.start(|_| {}), Err(DeferredError::AlreadyStarted));
/// ```
pub struct StartOnce<T, E> {
    deferred: DeferredResult<T, E>,
    state: Arc<Mutex<StartState>>,
}

impl<T: 'static, E: 'static> DeferredResult<T, E> {
    /// Wraps this result in a handle that refuses to start twice.
    pub fn once(self) -> StartOnce<T, E> {
        StartOnce {
            deferred: self,
            state: Arc::new(Mutex::new(StartState::Unstarted)),
        }
    }
}

impl<T: 'static, E: 'static> StartOnce<T, E> {
    /// Current lifecycle state.
    pub fn state(&self) -> StartState {
        *self.state.lock()
    }

    /// Starts the wrapped result if it has never been started.
    pub fn start<C>(&self, completion: C) -> Result<()>
    where
        C: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        {
            let mut state = self.state.lock();
            if *state != StartState::Unstarted {
                log::debug!("rejecting second start (state: {:?})", *state);
                return Err(DeferredError::AlreadyStarted);
            }
            *state = StartState::Started;
        }
        log::debug!("single-start handle started");

        // The lock is released above: a synchronous operation completes
        // inside `start` and takes it again.
        let state = Arc::clone(&self.state);
        self.deferred.start(move |outcome| {
            *state.lock() = StartState::Completed;
            log::debug!("single-start handle completed");
            completion(outcome);
        });
        Ok(())
    }

    /// Returns the underlying re-runnable result.
    pub fn into_inner(self) -> DeferredResult<T, E> {
        self.deferred
    }
}

impl<T, E> fmt::Debug for StartOnce<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StartOnce")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::Completion;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_second_start_rejected() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let once = DeferredResult::<(), ()>::of(move |done| {
            counter.fetch_add(1, Ordering::SeqCst);
            done.succeed(())
        })
        .once();

        assert_eq!(once.state(), StartState::Unstarted);
        assert!(once.start(|_| {}).is_ok());
        assert_eq!(once.start(|_| {}), Err(DeferredError::AlreadyStarted));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_started_until_completion_fires() {
        let parked: Arc<Mutex<Option<Completion<u8, ()>>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&parked);
        let once = DeferredResult::of(move |done| *slot.lock() = Some(done)).once();

        once.start(|_| {}).expect("first start");
        assert_eq!(once.state(), StartState::Started);

        let done = parked.lock().take().expect("operation parked its completion");
        done.succeed(1);
        assert_eq!(once.state(), StartState::Completed);
        assert!(format!("{once:?}").contains("Completed"));
    }

    #[test]
    fn test_into_inner_restarts_freely() {
        let once = DeferredResult::<u8, ()>::from_value(1).once();
        once.start(|_| {}).expect("first start");
        let inner = once.into_inner();
        let seen = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            let seen = Arc::clone(&seen);
            inner.start(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
