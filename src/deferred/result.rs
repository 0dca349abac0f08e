//! Cold, composable wrapper around a callback-driven operation
//!
//! A `DeferredResult` stores the *operation*, not its result: nothing runs
//! until [`DeferredResult::start`] is called, and every call to `start`
//! drives the whole composed chain again from the beginning.

use std::fmt;
use std::sync::Arc;

use super::completion::Completion;
use crate::outcome::Outcome;

type Operation<T, E> = dyn Fn(Completion<T, E>) + Send + Sync;

/// A single-outcome operation that has not been started yet
///
/// Build one from an immediate value ([`from_value`](Self::from_value)), an
/// immediate error ([`from_error`](Self::from_error)), a fallible closure
/// ([`from_fn`](Self::from_fn)) or any callback-based operation
/// ([`of`](Self::of)). Compose with [`map`](Self::map) and
/// [`and_then`](Self::and_then), then [`start`](Self::start) it.
///
/// Combinators are lazy and never mutate the original; each returns a new
/// value closing over the previous one. Cloning is cheap and shares the same
/// cold operation, never a cached outcome.
///
/// ### Chain depth
/// A synchronous run recurses once per combinator, both while starting and
/// while delivering the outcome. Chains of many thousands of `map`/`and_then`
/// links can overflow the thread stack (roughly 20,000 links on a 2 MiB
/// thread); build long pipelines from fewer, larger steps, or complete from
/// another task to cut the completion-side recursion.
///
/// ### Examples
/// ```rust
/// use deferred_outcome::{DeferredResult, Outcome};
///
/// let chain = DeferredResult::<u32, String>::from_value(15)
///     .map(|n| n * 2)
///     .and_then(|n| DeferredResult::from_value(n + 1));
///
/// chain.start(|outcome| assert_eq!(outcome, Outcome::Success(31)));
/// ```
pub struct DeferredResult<T, E> {
    operation: Arc<Operation<T, E>>,
}

impl<T: 'static, E: 'static> DeferredResult<T, E> {
    /// Wraps an arbitrary callback-based operation.
    ///
    /// The operation receives a [`Completion`] each time the result is
    /// started and must complete it exactly once, either before returning or
    /// later from any thread.
    ///
    /// ```rust
    /// use deferred_outcome::DeferredResult;
    ///
    /// fn lookup(id: u32, reply: impl FnOnce(Result<String, String>)) {
    ///     reply(Ok(format!("record {id}")));
    /// }
    ///
    /// let deferred = DeferredResult::of(|done| lookup(5, |r| done.complete_with(r)));
    /// deferred.start(|outcome| assert!(outcome.is_success()));
    /// ```
    pub fn of<F>(operation: F) -> Self
    where
        F: Fn(Completion<T, E>) + Send + Sync + 'static,
    {
        Self {
            operation: Arc::new(operation),
        }
    }

    /// Completes every run immediately with a copy of `outcome`.
    pub fn from_outcome(outcome: Outcome<T, E>) -> Self
    where
        T: Clone + Send + Sync,
        E: Clone + Send + Sync,
    {
        Self::of(move |done| done.complete(outcome.clone()))
    }

    /// Completes every run immediately with `value`.
    #[inline]
    pub fn from_value(value: T) -> Self
    where
        T: Clone + Send + Sync,
        E: Clone + Send + Sync,
    {
        Self::from_outcome(Outcome::success(value))
    }

    /// Completes every run immediately with `error`.
    #[inline]
    pub fn from_error(error: E) -> Self
    where
        T: Clone + Send + Sync,
        E: Clone + Send + Sync,
    {
        Self::from_outcome(Outcome::failure(error))
    }

    /// Evaluates a fallible closure on every run.
    ///
    /// This is the bridge for steps that may fail synchronously: use it as the
    /// continuation of [`and_then`](Self::and_then) instead of a failing `map`.
    pub fn from_fn<F>(operation: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
    {
        Self::of(move |done| done.complete(Outcome::from_fn(&operation)))
    }

    /// Runs the operation and hands its single outcome to `completion`.
    ///
    /// Returns as soon as the operation returns; `completion` may already have
    /// fired or may fire later. Starting the same value again runs the whole
    /// chain again. Use [`once`](Self::once) to forbid that.
    pub fn start<C>(&self, completion: C)
    where
        C: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        log::trace!("starting deferred result");
        self.run(Completion::new(completion));
    }

    pub(crate) fn run(&self, done: Completion<T, E>) {
        (self.operation)(done)
    }

    /// Transforms the success value with `f`.
    ///
    /// A failure is forwarded unchanged and `f` is not called. `f` must not
    /// fail; for fallible steps use [`and_then`](Self::and_then) with
    /// [`from_fn`](Self::from_fn).
    pub fn map<U, F>(self, f: F) -> DeferredResult<U, E>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredResult::of(move |done: Completion<U, E>| {
            let f = Arc::clone(&f);
            self.run(Completion::forwarding(move |outcome: Outcome<T, E>| {
                done.complete(outcome.map(|value| f(value)))
            }));
        })
    }

    /// Sequences another deferred step after this one.
    ///
    /// On success the value is passed to `f` and the returned result is
    /// started; its outcome becomes the outcome of the chain. On failure
    /// the error short-circuits to the completion and `f` is not called.
    pub fn and_then<U, F>(self, f: F) -> DeferredResult<U, E>
    where
        U: 'static,
        F: Fn(T) -> DeferredResult<U, E> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredResult::of(move |done: Completion<U, E>| {
            let f = Arc::clone(&f);
            self.run(Completion::forwarding(move |outcome: Outcome<T, E>| match outcome {
                Outcome::Success(value) => f(value).run(done),
                Outcome::Failure(error) => {
                    log::trace!("and_then short-circuited on failure");
                    done.fail(error)
                }
            }));
        })
    }
}

impl<T, E> Clone for DeferredResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            operation: Arc::clone(&self.operation),
        }
    }
}

impl<T, E> fmt::Debug for DeferredResult<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredResult").finish_non_exhaustive()
    }
}

impl<T, E> From<Outcome<T, E>> for DeferredResult<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Self::from_outcome(outcome)
    }
}
