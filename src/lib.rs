//! A bounded, thread-safe, blocking producer/consumer queue.
//!
//! Producers are rejected rather than blocked when the queue is full;
//! consumers block until an item arrives. See [`BoundedBlockingQueue`].

pub mod config;
pub mod queue;
pub mod trace;

pub use config::QueueConfig;
pub use queue::{
    BoundedBlockingQueue, Capacity, Consumer, InvalidConfiguration, PopTimeout, Producer,
    QueueFull,
};
