//! A fixed-capacity stack of `i32` values.
//!
//! Storage is allocated once, in [BoundedStack::new], and never grows. Pushing onto a full stack
//! or popping from an empty one is rejected rather than overflowing: the `try_*` methods return a
//! [StackError], while [BoundedStack::push] and [BoundedStack::pop] absorb the condition and emit
//! a `tracing` warning instead.
pub mod config;
pub mod error;
pub mod stack;

pub use config::Config;
pub use error::{Result, StackError};
pub use stack::{BoundedStack, EMPTY_SENTINEL, Iter};
