//! Producer and consumer handles over a shared [`BoundedBlockingQueue`].
//!
//! [`BoundedBlockingQueue::split`] moves the queue into an `Arc` and returns a
//! [`Producer`] and a [`Consumer`] pointing at it. Both halves are cheap to
//! clone, so any number of threads can hold either role.
//!
//! # Example
//! ```
//! use blocking_bounded_queue::BoundedBlockingQueue;
//! use std::thread;
//!
//! let (producer, consumer) = BoundedBlockingQueue::bounded(8).unwrap().split();
//!
//! let worker = thread::spawn(move || consumer.pop());
//! producer.push(42).unwrap();
//! assert_eq!(worker.join().unwrap(), 42);
//! ```

use super::blocking_queue::BoundedBlockingQueue;
use super::capacity::Capacity;
use super::error::{PopTimeout, QueueFull};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

impl<T> BoundedBlockingQueue<T> {
    /// Splits the queue into a producing and a consuming handle.
    pub fn split(self) -> (Producer<T>, Consumer<T>) {
        let inner = Arc::new(self);
        let producer = Producer {
            inner: Arc::clone(&inner),
        };
        (producer, Consumer { inner })
    }
}

/// The pushing half of a split queue.
///
/// Pushes fail with the original item when the queue is full.
pub struct Producer<T> {
    inner: Arc<BoundedBlockingQueue<T>>,
}

impl<T> Producer<T> {
    /// See [`BoundedBlockingQueue::push`].
    #[inline]
    pub fn push(&self, item: T) -> Result<(), QueueFull<T>> {
        self.inner.push(item)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.inner.capacity()
    }
}

impl<T> fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Producer").field(&self.inner).finish()
    }
}

impl<T> Clone for Producer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// The popping half of a split queue.
pub struct Consumer<T> {
    inner: Arc<BoundedBlockingQueue<T>>,
}

impl<T> Consumer<T> {
    /// See [`BoundedBlockingQueue::pop`].
    #[inline]
    pub fn pop(&self) -> T {
        self.inner.pop()
    }

    #[inline]
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeout> {
        self.inner.pop_timeout(timeout)
    }

    #[inline]
    pub fn pop_deadline(&self, deadline: Instant) -> Result<T, PopTimeout> {
        self.inner.pop_deadline(deadline)
    }

    #[inline]
    pub fn try_pop(&self) -> Option<T> {
        self.inner.try_pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.inner.capacity()
    }
}

impl<T> fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Consumer").field(&self.inner).finish()
    }
}

impl<T> Clone for Consumer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
