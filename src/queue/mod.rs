mod availability;
mod blocking_queue;
mod capacity;
mod error;
mod handle;

pub use blocking_queue::BoundedBlockingQueue;
pub use capacity::Capacity;
pub use error::{InvalidConfiguration, PopTimeout, QueueFull};
pub use handle::{Consumer, Producer};
