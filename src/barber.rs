//! Consumer loop: sleep while the room is empty, drain the queue otherwise.

use rand::{thread_rng, Rng};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::event::Event;
use crate::gate::SlotGate;
use crate::log::EventLog;
use crate::queue::{Dequeued, SyncQueue};
use crate::shutdown::Shutdown;
use crate::wake::WakeSignal;
use crate::work_item::WorkItem;

/// Long-lived consumer draining the shared queue.
///
/// State machine: `Sleeping -> Working -> Sleeping -> ... -> Terminated`.
/// The barber parks when the waiting room is empty, wakes on the latched
/// signal, and terminates once shutdown is observed with nothing left to
/// drain.
pub struct Barber {
    id: usize,
    gate: Arc<SlotGate>,
    queue: Arc<SyncQueue<WorkItem>>,
    wake: Arc<WakeSignal>,
    shutdown: Arc<Shutdown>,
    log: Arc<EventLog>,
    dequeue_timeout: Duration,
    service_min: Duration,
    service_max: Duration,
}

impl Barber {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: usize,
        gate: Arc<SlotGate>,
        queue: Arc<SyncQueue<WorkItem>>,
        wake: Arc<WakeSignal>,
        shutdown: Arc<Shutdown>,
        log: Arc<EventLog>,
        dequeue_timeout: Duration,
        service_min: Duration,
        service_max: Duration,
    ) -> Self {
        Self {
            id,
            gate,
            queue,
            wake,
            shutdown,
            log,
            dequeue_timeout,
            service_min,
            service_max,
        }
    }

    /// Run until shutdown is observed with an empty queue.
    pub fn run(&self) {
        loop {
            // Park only while no customer is waiting. A room that already
            // has occupants means work is pending (or about to land), so the
            // barber goes straight to the queue without needing a signal.
            if self.gate.room_empty() && !self.shutdown.is_requested() {
                self.log.emit(Event::BarberSleeps { barber: self.id });
                let mut woken = false;
                while !self.shutdown.is_requested() {
                    if self.wake.wait(self.dequeue_timeout) {
                        woken = true;
                        break;
                    }
                }
                if woken {
                    self.log.emit(Event::BarberWakes { barber: self.id });
                }
            }

            match self.queue.dequeue(self.dequeue_timeout) {
                Dequeued::Item(item) => self.serve(item),
                Dequeued::TimedOut => {
                    // Liveness guard, not "no work forever": log and retry.
                    self.log.emit(Event::QueueWaitTimeout { barber: self.id });
                }
                Dequeued::Closed => {
                    self.log.emit(Event::BarberStopped { barber: self.id });
                    return;
                }
            }
        }
    }

    /// Free the chair, then spend the randomized service time on the item.
    fn serve(&self, item: WorkItem) {
        self.gate.release();
        let duration = self.service_duration();
        self.log.emit(Event::ServiceStarted {
            barber: self.id,
            label: item.label,
            duration,
        });
        // Plain delay modelling the haircut; not a synchronization point.
        thread::sleep(duration);
    }

    fn service_duration(&self) -> Duration {
        let min = self.service_min.as_millis() as u64;
        let max = self.service_max.as_millis() as u64;
        Duration::from_millis(thread_rng().gen_range(min..=max))
    }
}
