//! Error types for the deferred-result plumbing.
//!
//! These never stand in for the caller's own error type `E`: a failing
//! operation travels as `Outcome::Failure(E)`. `DeferredError` only reports
//! misuse of the machinery around it.

use thiserror::Error;

/// Result type alias for deferred_outcome operations
pub type Result<T, E = DeferredError> = std::result::Result<T, E>;

/// Failures of the deferred machinery itself
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredError {
    /// A single-start handle was started a second time
    #[error("Deferred result was already started. Build a new handle with `once()` to run it again.")]
    AlreadyStarted,

    /// The operation dropped its completion without delivering an outcome
    #[error("Operation dropped its completion without delivering an outcome")]
    Abandoned,

    /// A Tokio-backed operation was started outside a Tokio runtime
    #[error("No Tokio runtime is running. Start Tokio-backed results from within a runtime.")]
    NoRuntime,
}
