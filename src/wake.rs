//! Latched wake signal for a sleeping barber.
//!
//! A bare condvar notify is lost when it fires before the receiver parks;
//! with a one-shot arrival racing a barber that is about to sleep, that
//! window is real. The signal therefore latches: a notification issued early
//! is consumed by the next `wait` instead of evaporating.

use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// Condition signal that remembers a pending notification.
pub struct WakeSignal {
    pending: Mutex<bool>,
    cond: Condvar,
}

impl WakeSignal {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Latch a notification and wake one parked waiter.
    pub fn notify(&self) {
        {
            let mut pending = self.pending.lock();
            *pending = true;
        }
        self.cond.notify_one();
    }

    /// Latch a notification and wake every parked waiter (shutdown path).
    pub fn notify_all(&self) {
        {
            let mut pending = self.pending.lock();
            *pending = true;
        }
        self.cond.notify_all();
    }

    /// Park for up to `timeout`, consuming a pending notification if one is
    /// latched. Returns `true` when a notification was consumed, `false` on
    /// a plain timeout or spurious wake.
    pub fn wait(&self, timeout: Duration) -> bool {
        let mut pending = self.pending.lock();
        if !*pending {
            let _ = self.cond.wait_for(&mut pending, timeout);
        }
        let notified = *pending;
        *pending = false;
        notified
    }
}

impl Default for WakeSignal {
    fn default() -> Self {
        Self::new()
    }
}
