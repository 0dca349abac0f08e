//! # Deferred Outcome
//!
//! Composable deferred results for callback-based operations.
//!
//! This crate provides two layers:
//!
//! - [`Outcome`] - an immutable two-case result: a success value or a failure
//! - [`DeferredResult`] - a cold wrapper around an operation that eventually
//!   delivers one `Outcome` to a completion callback, with lazy `map` and
//!   `and_then` combinators
//!
//! ## Features
//!
//! - `async` (default) - `.await` a `DeferredResult` through the futures bridge
//! - `tokio-async` - operations that spawn onto the current Tokio runtime
//! - `serde` - `Serialize`/`Deserialize` for `Outcome`
//!
//! ## Example
//!
//! ```rust
//! use deferred_outcome::{DeferredResult, Outcome};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct ExampleValue {
//!     number: i32,
//! }
//!
//! let lookup = DeferredResult::<ExampleValue, String>::of(|done| {
//!     done.succeed(ExampleValue { number: 15 })
//! });
//!
//! // Nothing has run yet; `start` drives the whole chain.
//! let doubled = lookup.map(|value| value.number * 2);
//! doubled.start(|outcome| assert_eq!(outcome, Outcome::Success(30)));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod deferred;
pub mod error;
pub mod outcome;

pub use deferred::{Completion, DeferredResult, StartOnce, StartState};
pub use error::{DeferredError, Result};
pub use outcome::Outcome;

#[cfg(feature = "async")]
pub use deferred::DeferredFuture;
