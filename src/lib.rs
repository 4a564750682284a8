//! Combinators for retrying fallible operations.
//!
//! An operation is attempted until it succeeds or a configurable attempt cap
//! is exhausted, with a fixed pause between attempts. The executor is generic
//! over the operation's error type and surfaces the final attempt's error
//! unchanged when every attempt fails.

pub mod blocking;
#[cfg(feature = "tokio")]
pub mod future;

pub use blocking::retry;
