//! The one-shot callback handed to a deferred operation

use std::fmt;

use crate::outcome::Outcome;

type Callback<T, E> = Box<dyn FnOnce(Outcome<T, E>) + Send>;

/// Receives the single outcome of one run of a deferred operation.
///
/// Every completion method takes `self`, so an operation can deliver at most
/// one outcome per run. An operation that drops its completion without
/// calling any of them leaves the run unfinished; that is logged, and a
/// future awaiting the run resolves to
/// [`DeferredError::Abandoned`](crate::DeferredError::Abandoned).
///
/// A completion is `Send`: it may be moved into another thread or task and
/// completed from there.
pub struct Completion<T, E> {
    callback: Option<Callback<T, E>>,
    forwarding: bool,
}

impl<T, E> Completion<T, E> {
    pub(crate) fn new<C>(callback: C) -> Self
    where
        C: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            forwarding: false,
        }
    }

    /// A completion created by a combinator to relay an upstream outcome.
    ///
    /// When one is dropped unfired, the completion it relays to is dropped
    /// too, so only the outermost one reports it.
    pub(crate) fn forwarding<C>(callback: C) -> Self
    where
        C: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            forwarding: true,
        }
    }

    /// Delivers the outcome of this run.
    pub fn complete(mut self, outcome: Outcome<T, E>) {
        if let Some(callback) = self.callback.take() {
            log::trace!(
                "completing deferred run with {}",
                if outcome.is_success() { "success" } else { "failure" }
            );
            callback(outcome);
        }
    }

    /// Delivers a success value.
    #[inline]
    pub fn succeed(self, value: T) {
        self.complete(Outcome::Success(value));
    }

    /// Delivers a failure.
    #[inline]
    pub fn fail(self, error: E) {
        self.complete(Outcome::Failure(error));
    }

    /// Delivers `Ok` as success and `Err` as failure.
    #[inline]
    pub fn complete_with(self, result: Result<T, E>) {
        self.complete(result.into());
    }
}

impl<T, E> Drop for Completion<T, E> {
    fn drop(&mut self) {
        if self.callback.is_none() {
            return;
        }
        if self.forwarding {
            log::trace!("upstream dropped a forwarding completion");
        } else {
            log::warn!("deferred operation dropped its completion without delivering an outcome");
        }
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}
