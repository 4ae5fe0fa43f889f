//! A last-in-first-out stack over a private backing store.
pub mod error;
pub use error::{EmptyStackError, Result};

pub mod stack;
pub use stack::Stack;
