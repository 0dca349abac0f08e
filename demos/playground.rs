//! Walks through three ways of getting a result out of a callback:
//! a fallible closure, an explicit `Outcome`, and a chained `DeferredResult`.
//!
//! Run with `RUST_LOG=trace cargo run --example playground` to see the
//! library's trace output.

use deferred_outcome::{DeferredResult, Outcome};
use log::info;

#[derive(Debug, Clone, PartialEq)]
struct ExampleValue {
    number: i32,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
enum ExampleError {
    #[error("did fail")]
    DidFail,
}

type Reply = Outcome<ExampleValue, ExampleError>;

// Pattern 1: the callback receives a closure that either returns or fails.

fn will_always_succeed(result_returner: impl FnOnce(&dyn Fn() -> Result<ExampleValue, ExampleError>)) {
    result_returner(&|| Ok(ExampleValue { number: 15 }))
}

fn will_always_fail(result_returner: impl FnOnce(&dyn Fn() -> Result<ExampleValue, ExampleError>)) {
    result_returner(&|| Err(ExampleError::DidFail))
}

// Pattern 2: the callback receives an explicit outcome.

fn will_always_succeed2(reply: impl FnOnce(Reply)) {
    reply(Outcome::success(ExampleValue { number: 15 }))
}

fn will_always_fail2(reply: impl FnOnce(Reply)) {
    reply(Outcome::failure(ExampleError::DidFail))
}

fn will_always_succeed2_with_arg(argument: i32, reply: impl FnOnce(Reply)) {
    info!("called with argument {argument}");
    reply(Outcome::success(ExampleValue { number: 15 }))
}

fn use_result(outcome: Reply) {
    match outcome.into_result() {
        Ok(value) => info!("Got value {value:?}"),
        Err(error) => info!("Caught error {error}"),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("-- fallible closure passed to the callback");
    will_always_succeed(|result| use_result(Outcome::from_fn(result)));
    will_always_fail(|result| use_result(Outcome::from_fn(result)));

    info!("-- explicit outcome");
    will_always_succeed2(use_result);
    will_always_fail2(use_result);

    info!("-- deferred result");
    let succeed = DeferredResult::of(|done| will_always_succeed2(|outcome| done.complete(outcome)));
    succeed.start(use_result);

    let fail = DeferredResult::of(|done| will_always_fail2(|outcome| done.complete(outcome)));
    fail.start(use_result);

    let with_arg = DeferredResult::of(|done| will_always_succeed2_with_arg(5, |outcome| done.complete(outcome)));
    with_arg
        .and_then(|value| {
            DeferredResult::from_fn(move || {
                value
                    .number
                    .checked_mul(2)
                    .map(|number| ExampleValue { number })
                    .ok_or(ExampleError::DidFail)
            })
        })
        .start(use_result);
}
