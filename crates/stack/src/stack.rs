use std::fmt;

use crate::error::{EmptyStackError, Result};

/// Last-in-first-out stack.
///
/// The backing storage is private. Elements only enter through [`Stack::push`] and
/// only leave through [`Stack::pop`]; [`Stack::peek`] lends out the top element and
/// nothing else.
pub struct Stack<T> {
    inner: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Pre-allocate room for `capacity` elements. Pushing past it still succeeds.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    /// Number of elements currently on the stack.
    pub fn count(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The top element, without removing it.
    pub fn peek(&self) -> Result<&T> {
        let Some(top) = self.inner.last() else {
            log::debug!("peek on empty stack");
            return Err(EmptyStackError);
        };
        Ok(top)
    }

    /// Remove and return the top element. An empty stack is left untouched.
    pub fn pop(&mut self) -> Result<T> {
        let Some(top) = self.inner.pop() else {
            log::debug!("pop on empty stack");
            return Err(EmptyStackError);
        };
        log::trace!("POP: count = {}", self.inner.len());
        Ok(top)
    }

    pub fn push(&mut self, value: T) {
        self.inner.push(value);
        log::trace!("PUSH: count = {}", self.inner.len());
    }

    pub fn clear(&mut self) {
        self.inner.clear();
        log::trace!("CLEAR");
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("count", &self.inner.len())
            .finish_non_exhaustive()
    }
}
