use parking_lot::{Condvar, Mutex};
use std::time::Instant;

/// Counting semaphore tracking how many items are ready to be popped.
///
/// # Overview
///
/// Each successful push calls [`release`](Availability::release) exactly once
/// and each pop consumes exactly one permit before it touches the buffer.
/// The queue releases while it still holds the buffer lock, so at every
/// instant `permits <= buffer.len()`: a consumer that obtained a permit is
/// guaranteed to find an item waiting for it.
///
/// Waiting happens on the semaphore's own lock, never on the buffer lock, so
/// blocked consumers do not hold up producers.
pub(crate) struct Availability {
    permits: Mutex<usize>,
    ready: Condvar,
}

impl Availability {
    pub(crate) fn new() -> Self {
        Self {
            permits: Mutex::new(0),
            ready: Condvar::new(),
        }
    }

    /// Adds one permit and wakes at most one waiting consumer.
    #[inline]
    pub(crate) fn release(&self) {
        let mut permits = self.permits.lock();
        *permits += 1;
        self.ready.notify_one();
    }

    /// Blocks until a permit is available, then takes it.
    pub(crate) fn acquire(&self) {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.ready.wait(&mut permits);
        }
        *permits -= 1;
    }

    /// Takes a permit if one is available right now.
    #[inline]
    pub(crate) fn try_acquire(&self) -> bool {
        let mut permits = self.permits.lock();
        if *permits == 0 {
            return false;
        }
        *permits -= 1;
        true
    }

    /// Blocks until a permit is available or `deadline` passes.
    ///
    /// Returns `false` on expiry. No permit is taken in that case.
    pub(crate) fn acquire_until(&self, deadline: Instant) -> bool {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            if self.ready.wait_until(&mut permits, deadline).timed_out() {
                // A release may have landed right at the deadline.
                if *permits == 0 {
                    return false;
                }
                break;
            }
        }
        *permits -= 1;
        true
    }

    /// Snapshot of the permit count.
    #[inline]
    pub(crate) fn available(&self) -> usize {
        *self.permits.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::Availability;
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::{Duration, Instant};

    #[test]
    fn release_then_acquire() {
        let availability = Availability::new();
        availability.release();
        availability.release();
        assert_eq!(availability.available(), 2);
        availability.acquire();
        assert!(availability.try_acquire());
        assert!(!availability.try_acquire());
        assert_eq!(availability.available(), 0);
    }

    #[test]
    fn expired_wait_takes_no_permit() {
        let availability = Availability::new();
        let deadline = Instant::now() + Duration::from_millis(50);
        assert!(!availability.acquire_until(deadline));
        assert!(Instant::now() >= deadline);

        availability.release();
        assert_eq!(availability.available(), 1);
    }

    #[test]
    fn blocked_acquire_wakes_on_release() {
        let availability = Arc::new(Availability::new());
        let waiter = {
            let availability = Arc::clone(&availability);
            thread::spawn(move || availability.acquire())
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());
        availability.release();
        waiter.join().unwrap();
        assert_eq!(availability.available(), 0);
    }

    #[test]
    fn one_release_wakes_one_waiter() {
        const WAITERS: usize = 4;

        let availability = Arc::new(Availability::new());
        let started = Arc::new(Barrier::new(WAITERS + 1));
        let waiters: Vec<_> = (0..WAITERS)
            .map(|_| {
                let availability = Arc::clone(&availability);
                let started = Arc::clone(&started);
                thread::spawn(move || {
                    started.wait();
                    availability.acquire_until(Instant::now() + Duration::from_secs(2))
                })
            })
            .collect();

        started.wait();
        thread::sleep(Duration::from_millis(50));
        availability.release();

        let woken = waiters
            .into_iter()
            .map(|w| w.join().unwrap())
            .filter(|acquired| *acquired)
            .count();
        assert_eq!(woken, 1);
        assert_eq!(availability.available(), 0);
    }
}
