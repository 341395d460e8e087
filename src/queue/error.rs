use std::fmt;
use thiserror::Error;

/// A queue was configured with a capacity of zero or less.
///
/// Only produced while constructing a queue; an existing queue never
/// reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("queue capacity must be a positive integer, got {requested}")]
pub struct InvalidConfiguration {
    requested: i128,
}

impl InvalidConfiguration {
    pub(crate) fn new(requested: i128) -> Self {
        Self { requested }
    }

    /// The capacity that was rejected.
    pub fn requested(&self) -> i128 {
        self.requested
    }
}

/// A push was rejected because the queue already holds `capacity` items.
///
/// The rejected item is handed back untouched so the caller can retry,
/// drop it or escalate.
#[derive(Error)]
#[error("queue is at capacity of {capacity} items")]
pub struct QueueFull<T> {
    item: T,
    capacity: usize,
}

impl<T> QueueFull<T> {
    pub(crate) fn new(item: T, capacity: usize) -> Self {
        Self { item, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    /// Recovers the item that could not be pushed.
    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> fmt::Debug for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueFull")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// No item arrived before the pop deadline expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("timed out waiting for an item")]
pub struct PopTimeout;
