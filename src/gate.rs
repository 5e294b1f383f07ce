//! Bounded slot gate tracking free waiting-room chairs.
//!
//! The gate owns the capacity and the free-slot counter. Reservation and
//! release are single CAS loops, so the counter stays inside `[0, capacity]`
//! under any interleaving and no operation ever blocks.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of a reservation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    /// Reserved the first slot of a fully empty room; the caller owes the
    /// sleeping consumer a wake signal.
    FirstArrival,
    /// Reserved a slot in a room that already had at least one occupant.
    /// No wake is owed, the consumer is busy or was already signaled.
    Seated,
    /// No free slot; nothing was modified and the caller must leave.
    Rejected,
}

/// Free-chair accounting for the waiting room.
pub struct SlotGate {
    capacity: usize,
    available: AtomicUsize,
}

impl SlotGate {
    /// Create a gate with all `capacity` slots free.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            available: AtomicUsize::new(capacity),
        }
    }

    /// Atomically reserve one slot if any is free.
    ///
    /// The empty-room observation is taken from the same CAS that performs
    /// the decrement, so "was I the first arrival" cannot race with another
    /// reservation in between.
    pub fn try_reserve(&self) -> Reservation {
        let mut observed = self.available.load(Ordering::Relaxed);
        loop {
            if observed == 0 {
                return Reservation::Rejected;
            }
            match self.available.compare_exchange_weak(
                observed,
                observed - 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    return if observed == self.capacity {
                        Reservation::FirstArrival
                    } else {
                        Reservation::Seated
                    };
                }
                Err(actual) => observed = actual,
            }
        }
    }

    /// Return one slot, clamped at capacity to guard against double release.
    pub fn release(&self) {
        let mut observed = self.available.load(Ordering::Relaxed);
        loop {
            if observed >= self.capacity {
                return;
            }
            match self.available.compare_exchange_weak(
                observed,
                observed + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return,
                Err(actual) => observed = actual,
            }
        }
    }

    /// True when no customer is waiting (all slots free).
    pub fn room_empty(&self) -> bool {
        self.available.load(Ordering::Relaxed) == self.capacity
    }

    /// True when every slot is taken.
    pub fn room_full(&self) -> bool {
        self.available.load(Ordering::Relaxed) == 0
    }

    /// Configured number of chairs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current number of free chairs.
    pub fn available(&self) -> usize {
        self.available.load(Ordering::Relaxed)
    }
}
