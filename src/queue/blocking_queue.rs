//! Bounded, thread-safe, blocking multi-producer multi-consumer queue.
//!
//! # Overview
//! [`BoundedBlockingQueue`] accepts items from any number of producer threads
//! and hands them out, in first-in-first-out order, to any number of consumer
//! threads. The two sides behave asymmetrically:
//!
//! - [`push`](BoundedBlockingQueue::push) never blocks. When the queue already
//!   holds `capacity` items the push fails with [`QueueFull`] and the item is
//!   handed back.
//! - [`pop`](BoundedBlockingQueue::pop) blocks while the queue is empty and
//!   returns as soon as an item has been pushed.
//!
//! # Example
//! ```
//! use blocking_bounded_queue::BoundedBlockingQueue;
//!
//! let queue = BoundedBlockingQueue::bounded(2).unwrap();
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! assert_eq!(queue.push(3).unwrap_err().into_inner(), 3);
//! assert_eq!(queue.pop(), 1);
//! ```
//!
//! # Internals
//! The items live in a `VecDeque` behind a single mutex. Readiness is tracked
//! separately by an [`Availability`] semaphore holding one permit per item.
//! A push appends and releases its permit under the buffer lock; a pop first
//! takes a permit (blocking on the semaphore, not the buffer) and only then
//! locks the buffer to remove the head. Permits therefore never outnumber
//! resident items, which is what makes every pushed item reach exactly one
//! pop. Both halves are wrapped in [`CachePadded`] so producers hammering the
//! buffer do not share a cache line with consumers parked on the semaphore.

use super::availability::Availability;
use super::capacity::Capacity;
use super::error::{InvalidConfiguration, PopTimeout, QueueFull};
use crate::config::QueueConfig;
use crate::trace::{debug, trace};
use crossbeam_utils::CachePadded;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

/// Initial allocation for bounded buffers is capped so that a huge limit does
/// not reserve memory up front.
const MAX_PREALLOCATED: usize = 1024;

/// A FIFO queue that rejects pushes when full and blocks pops when empty.
pub struct BoundedBlockingQueue<T> {
    buffer: CachePadded<Mutex<VecDeque<T>>>,
    availability: CachePadded<Availability>,
    capacity: Capacity,
    label: Option<String>,
}

impl<T> BoundedBlockingQueue<T> {
    /// Creates an empty queue with the given capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::build(capacity, None)
    }

    /// Creates an empty queue holding at most `limit` items.
    ///
    /// Fails with [`InvalidConfiguration`] when `limit` is zero.
    pub fn bounded(limit: usize) -> Result<Self, InvalidConfiguration> {
        Capacity::bounded(limit).map(Self::with_capacity)
    }

    /// Creates an empty queue that never rejects a push for size reasons.
    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    /// Creates a queue from a runtime configuration.
    ///
    /// The configured label, if any, tags every trace event of this queue.
    pub fn from_config(config: &QueueConfig) -> Result<Self, InvalidConfiguration> {
        let capacity = config.capacity()?;
        Ok(Self::build(capacity, config.label.clone()))
    }

    fn build(capacity: Capacity, label: Option<String>) -> Self {
        let buffer = match capacity.limit() {
            Some(limit) => VecDeque::with_capacity(limit.min(MAX_PREALLOCATED)),
            None => VecDeque::new(),
        };
        debug!(queue = label.as_deref().unwrap_or(""), %capacity, "queue created");
        Self {
            buffer: CachePadded::new(Mutex::new(buffer)),
            availability: CachePadded::new(Availability::new()),
            capacity,
            label,
        }
    }

    /// Appends `item` to the tail of the queue.
    ///
    /// Never blocks. Returns [`QueueFull`] carrying the item back if the queue
    /// already holds `capacity` items; the queue is left untouched in that case.
    /// On success exactly one waiting consumer, if any, is woken.
    pub fn push(&self, item: T) -> Result<(), QueueFull<T>> {
        let mut buffer = self.buffer.lock();
        if let Some(limit) = self.capacity.limit().filter(|&limit| buffer.len() >= limit) {
            drop(buffer);
            debug!(queue = self.label(), limit, "push rejected, queue full");
            return Err(QueueFull::new(item, limit));
        }
        buffer.push_back(item);
        // Released under the buffer lock: a permit is only ever visible once its
        // item is already in the buffer.
        self.availability.release();
        trace!(queue = self.label(), len = buffer.len(), "pushed");
        Ok(())
    }

    /// Removes and returns the head of the queue, blocking while it is empty.
    ///
    /// There is no timeout; use [`pop_timeout`](Self::pop_timeout) or
    /// [`pop_deadline`](Self::pop_deadline) to bound the wait.
    pub fn pop(&self) -> T {
        self.availability.acquire();
        self.take_head()
    }

    /// Like [`pop`](Self::pop), but gives up after `timeout`.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<T, PopTimeout> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.pop_deadline(deadline),
            // Too far in the future to represent: wait indefinitely.
            None => Ok(self.pop()),
        }
    }

    /// Like [`pop`](Self::pop), but gives up once `deadline` has passed.
    ///
    /// An expired wait consumes nothing: the next item still goes to some
    /// later pop.
    pub fn pop_deadline(&self, deadline: Instant) -> Result<T, PopTimeout> {
        if !self.availability.acquire_until(deadline) {
            debug!(queue = self.label(), "pop timed out");
            return Err(PopTimeout);
        }
        Ok(self.take_head())
    }

    /// Removes the head of the queue if an item is available right now.
    pub fn try_pop(&self) -> Option<T> {
        self.availability
            .try_acquire()
            .then(|| self.take_head())
    }

    /// Dequeues the head after a permit has been taken.
    fn take_head(&self) -> T {
        let mut buffer = self.buffer.lock();
        let item = buffer
            .pop_front()
            .expect("availability permit taken without a buffered item");
        trace!(queue = self.label(), len = buffer.len(), "popped");
        item
    }

    /// Number of items currently resident. A snapshot under concurrent use.
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Returns `true` if a push issued right now would be rejected.
    pub fn is_full(&self) -> bool {
        !self.capacity.admits(self.buffer.lock().len())
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl<T> Default for BoundedBlockingQueue<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> fmt::Debug for BoundedBlockingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBlockingQueue")
            .field("label", &self.label)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("available", &self.availability.available())
            .finish()
    }
}
