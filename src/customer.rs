//! One-shot customer: arrive, take a chair or leave, enqueue, maybe wake.

use std::sync::Arc;

use crate::event::Event;
use crate::gate::{Reservation, SlotGate};
use crate::log::EventLog;
use crate::queue::SyncQueue;
use crate::wake::WakeSignal;
use crate::work_item::WorkItem;

/// A single arrival event. Runs once on its own thread and terminates.
pub struct Customer {
    id: u64,
    gate: Arc<SlotGate>,
    queue: Arc<SyncQueue<WorkItem>>,
    wake: Arc<WakeSignal>,
    log: Arc<EventLog>,
}

impl Customer {
    pub fn new(
        id: u64,
        gate: Arc<SlotGate>,
        queue: Arc<SyncQueue<WorkItem>>,
        wake: Arc<WakeSignal>,
        log: Arc<EventLog>,
    ) -> Self {
        Self {
            id,
            gate,
            queue,
            wake,
            log,
        }
    }

    /// Execute the single arrival attempt.
    ///
    /// The first arrival into a fully empty room owes the sleeping barber a
    /// wake signal; any later arrival seats itself silently, and a full room
    /// turns the customer away without touching the queue.
    pub fn run(self) {
        self.log.emit(Event::CustomerArrived { id: self.id });
        match self.gate.try_reserve() {
            Reservation::Rejected => {
                self.log.emit(Event::CustomerLeft { id: self.id });
            }
            Reservation::FirstArrival => {
                self.queue.enqueue(WorkItem::new(self.id));
                self.wake.notify();
            }
            Reservation::Seated => {
                self.queue.enqueue(WorkItem::new(self.id));
            }
        }
    }
}
