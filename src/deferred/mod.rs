//! Deferred results: cold, chainable, callback-driven operations
//!
//! Pick how results are observed:
//! - callbacks: `DeferredResult::start`, available everywhere
//! - `async`: `.await` a `DeferredResult` or call `outcome()`
//! - `tokio-async`: build operations that spawn onto the current Tokio runtime

pub mod completion;
pub mod once;
pub mod result;

#[cfg(feature = "async")]
pub mod future_ext;

#[cfg(feature = "tokio-async")]
pub mod tokio;

pub use completion::Completion;
pub use once::{StartOnce, StartState};
pub use result::DeferredResult;

#[cfg(feature = "async")]
pub use future_ext::DeferredFuture;
