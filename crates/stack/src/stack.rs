use std::fmt;

use tracing::{trace, warn};
use util::collections::Array;

use crate::{Config, Result, StackError};

/// Value returned by [BoundedStack::pop_or_sentinel] when the stack is empty. It cannot be told
/// apart from a stored `-1`.
pub const EMPTY_SENTINEL: i32 = -1;

/// Iterator over the live elements of a [BoundedStack], from the top down.
pub type Iter<'a> = std::iter::Copied<std::iter::Rev<std::slice::Iter<'a, i32>>>;

/// Fixed capacity stack.
pub struct BoundedStack {
    buffer: Array<i32>,
    len: usize,
}

impl BoundedStack {
    /// Allocate a stack that holds up to `capacity` elements. Fails if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(StackError::InvalidCapacity);
        }
        Ok(Self {
            buffer: Array::filled(capacity, 0),
            len: 0,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of pushes that will succeed before the stack is full.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Index of the most recently pushed element, or `None` when empty.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn peek(&self) -> Option<i32> {
        self.top().map(|top| self.buffer[top])
    }

    /// Push `value`, handing it back in [StackError::Full] if there is no room. State is
    /// untouched on error.
    pub fn try_push(&mut self, value: i32) -> Result<()> {
        if self.is_full() {
            return Err(StackError::Full {
                value,
                capacity: self.capacity(),
            });
        }
        self.buffer[self.len] = value;
        self.len += 1;
        trace!(value, len = self.len, "push");
        Ok(())
    }

    /// Pop the top element, or [StackError::Empty]. State is untouched on error.
    pub fn try_pop(&mut self) -> Result<i32> {
        let Some(top) = self.top() else {
            return Err(StackError::Empty);
        };
        let value = self.buffer[top];
        self.len = top;
        trace!(value, len = self.len, "pop");
        Ok(value)
    }

    /// Push `value`. On a full stack this is a no-op that logs a warning.
    pub fn push(&mut self, value: i32) {
        if let Err(StackError::Full { value, capacity }) = self.try_push(value) {
            warn!(value, capacity, "stack is full");
        }
    }

    /// Pop the top element. On an empty stack this logs a warning and returns `None`.
    pub fn pop(&mut self) -> Option<i32> {
        match self.try_pop() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(capacity = self.capacity(), "stack is empty");
                None
            }
        }
    }

    /// Like [BoundedStack::pop], but returns [EMPTY_SENTINEL] when empty.
    pub fn pop_or_sentinel(&mut self) -> i32 {
        self.pop().unwrap_or(EMPTY_SENTINEL)
    }

    /// Drop every element. The storage is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Live elements, bottom first.
    pub fn as_slice(&self) -> &[i32] {
        &self.buffer.as_slice()[..self.len]
    }

    /// Live elements in pop order.
    pub fn iter(&self) -> Iter<'_> {
        self.as_slice().iter().rev().copied()
    }
}

impl<'a> IntoIterator for &'a BoundedStack {
    type Item = i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}
