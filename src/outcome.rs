//! The two-case outcome delivered by every deferred operation
//!
//! `Outcome` is plain data: exactly one of a success value or a failure. It
//! carries failures through `map`/`and_then` chains without ever unwinding,
//! and hands them back to `?` propagation only through [`Outcome::into_result`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The final result of a deferred operation
///
/// Holds either a success value of type `T` or a failure of type `E`, never
/// both and never neither. Outcomes are immutable; every transformation
/// consumes the outcome and returns a new one.
///
/// ### Examples
/// ```rust
/// use deferred_outcome::Outcome;
///
/// let ok: Outcome<u32, String> = Outcome::success(15);
/// assert_eq!(ok.into_result(), Ok(15));
///
/// let failed: Outcome<u32, String> = Outcome::failure("did fail".to_string());
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T, E> {
    /// The operation produced a value
    Success(T),
    /// The operation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    #[inline]
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Runs `operation` immediately and captures whatever it returns.
    ///
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`. The
    /// error is kept as-is; nothing is retried.
    ///
    /// ```rust
    /// use deferred_outcome::Outcome;
    ///
    /// let parsed: Outcome<i32, _> = Outcome::from_fn(|| "15".parse::<i32>());
    /// assert_eq!(parsed, Outcome::Success(15));
    /// ```
    #[inline]
    pub fn from_fn<F>(operation: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        operation().into()
    }

    /// Consumes the outcome and returns the value, or the stored error as `Err`.
    ///
    /// This is the one place a failure leaves the outcome plumbing and
    /// re-enters `?` propagation.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Returns true if the outcome holds a value.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns true if the outcome holds a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Borrows the value or the error.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the value, discarding a failure.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure, discarding a value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Transforms the success value, forwarding a failure untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

// Conversion traits
impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
