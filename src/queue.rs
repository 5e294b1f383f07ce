//! Synchronized FIFO work queue shared by customers and barbers.
//!
//! The queue is a `VecDeque` protected by a mutex and condition variable.
//! Producers push and notify without ever blocking; consumers block with a
//! bounded timeout so a stalled queue can never park a thread forever.
//! Closing the queue wakes every waiter and lets consumers drain the
//! remaining items before they observe termination.

use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

/// Outcome of a bounded dequeue wait.
#[derive(Debug, PartialEq, Eq)]
pub enum Dequeued<T> {
    /// The head item was removed and returned.
    Item(T),
    /// The timeout elapsed with the queue still empty and the queue still
    /// open. A liveness guard, not a termination condition: the caller is
    /// expected to re-check and wait again.
    TimedOut,
    /// The queue is closed and fully drained; no more work will ever arrive.
    Closed,
}

struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// Mutex/condvar FIFO with close-aware, timeout-bounded dequeue.
pub struct SyncQueue<T> {
    inner: Mutex<Inner<T>>,
    available: Condvar,
}

impl<T> SyncQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                closed: false,
            }),
            available: Condvar::new(),
        }
    }

    /// Append an item and wake one waiting consumer. Never blocks.
    ///
    /// Items are accepted even after `close()`: a late producer must not
    /// lose its item, and consumers keep draining until the queue is empty.
    pub fn enqueue(&self, item: T) {
        {
            let mut inner = self.inner.lock();
            inner.items.push_back(item);
        }
        self.available.notify_one();
    }

    /// Remove and return the head item, waiting up to `timeout` for one.
    ///
    /// Returns the head whenever an item is present at wake time. `Closed`
    /// is only reported once the queue is both closed and empty, so no
    /// queued item is ever skipped. A timeout while the queue is still open
    /// reports `TimedOut` and never touches the (empty) queue.
    pub fn dequeue(&self, timeout: Duration) -> Dequeued<T> {
        let mut inner = self.inner.lock();
        loop {
            if let Some(item) = inner.items.pop_front() {
                return Dequeued::Item(item);
            }
            if inner.closed {
                return Dequeued::Closed;
            }
            let result = self.available.wait_for(&mut inner, timeout);
            if result.timed_out() && inner.items.is_empty() && !inner.closed {
                return Dequeued::TimedOut;
            }
        }
    }

    /// Mark the queue closed and wake every waiter. Idempotent.
    pub fn close(&self) {
        {
            let mut inner = self.inner.lock();
            inner.closed = true;
        }
        self.available.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }
}

impl<T> Default for SyncQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
