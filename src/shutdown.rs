//! Coordinated shutdown: a monotonic flag plus the broadcast that unparks
//! every waiter so no thread is left blocked after termination is requested.

use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::queue::SyncQueue;
use crate::wake::WakeSignal;
use crate::work_item::WorkItem;

/// Process-wide shutdown flag. False at start, set true exactly once.
pub struct Shutdown {
    flag: AtomicBool,
}

impl Shutdown {
    pub fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Set the flag. Returns `true` only for the first caller.
    pub fn request(&self) -> bool {
        !self.flag.swap(true, Ordering::Relaxed)
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Flips the flag and wakes everything that might be parked.
///
/// Cloneable so the Ctrl+C handler and the main thread can both hold one;
/// only the first `request` performs the broadcast.
#[derive(Clone)]
pub struct ShutdownCoordinator {
    shutdown: Arc<Shutdown>,
    queue: Arc<SyncQueue<WorkItem>>,
    wake: Arc<WakeSignal>,
    stop_tx: Sender<()>,
}

impl ShutdownCoordinator {
    pub fn new(
        shutdown: Arc<Shutdown>,
        queue: Arc<SyncQueue<WorkItem>>,
        wake: Arc<WakeSignal>,
        stop_tx: Sender<()>,
    ) -> Self {
        Self {
            shutdown,
            queue,
            wake,
            stop_tx,
        }
    }

    /// Begin coordinated termination. Idempotent.
    ///
    /// Order matters: the flag goes first so every waiter woken by the
    /// broadcasts below already observes it set. Closing the queue unblocks
    /// dequeue waiters, the wake broadcast unparks sleeping barbers, and the
    /// stop channel unblocks the arrival driver so no new customer is
    /// spawned.
    pub fn request(&self) {
        if !self.shutdown.request() {
            return;
        }
        self.queue.close();
        self.wake.notify_all();
        let _ = self.stop_tx.send(());
    }
}
