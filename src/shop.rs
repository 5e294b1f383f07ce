//! Shop orchestration.
//!
//! This module wires the gate, queue, wake signal, and shutdown coordinator
//! together, exposes the configuration object that makes every timing
//! tunable, and owns the threads: one per barber, one arrival driver, plus
//! one short-lived thread per customer spawned by the driver.

use crossbeam_channel::{bounded, select, tick, Receiver};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::barber::Barber;
use crate::customer::Customer;
use crate::gate::SlotGate;
use crate::log::EventLog;
use crate::queue::SyncQueue;
use crate::shutdown::{Shutdown, ShutdownCoordinator};
use crate::wake::WakeSignal;
use crate::work_item::WorkItem;

/// Timing and sizing knobs for one simulation run.
///
/// All values are plain `Duration`s so tests can run the whole shop in
/// milliseconds while the CLI keeps the second-scale reference timings.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Number of waiting-room chairs (the gate capacity). Must be positive.
    pub chairs: usize,
    /// Number of independent barber loops sharing the one queue.
    pub barbers: usize,
    /// Interval between customer arrivals.
    pub arrival_interval: Duration,
    /// Bounded wait used by dequeue and by the barber's parked sleep.
    pub dequeue_timeout: Duration,
    /// Lower bound of the randomized service time.
    pub service_min: Duration,
    /// Upper bound of the randomized service time.
    pub service_max: Duration,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            chairs: 3,
            barbers: 1,
            arrival_interval: Duration::from_secs(3),
            dequeue_timeout: Duration::from_secs(4),
            service_min: Duration::from_secs(1),
            service_max: Duration::from_secs(5),
        }
    }
}

/// Complete shop wiring that owns the shared state and the thread handles.
pub struct BarberShop {
    config: ShopConfig,
    gate: Arc<SlotGate>,
    queue: Arc<SyncQueue<WorkItem>>,
    wake: Arc<WakeSignal>,
    shutdown: Arc<Shutdown>,
    log: Arc<EventLog>,
    coordinator: ShutdownCoordinator,
    stop_rx: Receiver<()>,
    barbers: Mutex<Vec<JoinHandle<()>>>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl BarberShop {
    /// Build the shared state without starting any threads yet.
    pub fn new(config: ShopConfig, log: EventLog) -> Result<Self, Box<dyn std::error::Error>> {
        if config.chairs == 0 {
            return Err("chair count must be positive".into());
        }
        if config.barbers == 0 {
            return Err("at least one barber is required".into());
        }
        if config.service_min > config.service_max {
            return Err("service_min must not exceed service_max".into());
        }

        let gate = Arc::new(SlotGate::new(config.chairs));
        let queue = Arc::new(SyncQueue::new());
        let wake = Arc::new(WakeSignal::new());
        let shutdown = Arc::new(Shutdown::new());
        let (stop_tx, stop_rx) = bounded(1);
        let coordinator =
            ShutdownCoordinator::new(shutdown.clone(), queue.clone(), wake.clone(), stop_tx);

        Ok(Self {
            config,
            gate,
            queue,
            wake,
            shutdown,
            log: Arc::new(log),
            coordinator,
            stop_rx,
            barbers: Mutex::new(Vec::new()),
            driver: Mutex::new(None),
        })
    }

    /// Launch the barber threads and the arrival driver.
    pub fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        for id in 1..=self.config.barbers {
            let barber = Barber::new(
                id,
                self.gate.clone(),
                self.queue.clone(),
                self.wake.clone(),
                self.shutdown.clone(),
                self.log.clone(),
                self.config.dequeue_timeout,
                self.config.service_min,
                self.config.service_max,
            );
            let handle = thread::Builder::new()
                .name(format!("barber-{id}"))
                .spawn(move || barber.run())?;
            self.barbers.lock().push(handle);
        }

        let driver = ArrivalDriver {
            gate: self.gate.clone(),
            queue: self.queue.clone(),
            wake: self.wake.clone(),
            shutdown: self.shutdown.clone(),
            log: self.log.clone(),
            interval: self.config.arrival_interval,
            stop_rx: self.stop_rx.clone(),
        };
        let handle = thread::Builder::new()
            .name("arrival-driver".to_string())
            .spawn(move || driver.run())?;
        *self.driver.lock() = Some(handle);

        Ok(())
    }

    /// Signal every shop thread to stop. Idempotent.
    pub fn shutdown(&self) {
        self.coordinator.request();
    }

    /// Clone of the coordinator, for external triggers such as Ctrl+C.
    pub fn coordinator(&self) -> ShutdownCoordinator {
        self.coordinator.clone()
    }

    /// Wait for the driver (which joins its customers) and all barbers.
    pub fn join(&self) {
        let driver = self.driver.lock().take();
        if let Some(handle) = driver {
            let _ = handle.join();
        }
        let barbers: Vec<_> = self.barbers.lock().drain(..).collect();
        for handle in barbers {
            let _ = handle.join();
        }
    }

    pub fn gate(&self) -> &SlotGate {
        &self.gate
    }

    pub fn queue(&self) -> &SyncQueue<WorkItem> {
        &self.queue
    }
}

/// Periodically spawns one-shot customers until told to stop.
///
/// Runs on its own thread. The stop channel makes shutdown immediate
/// instead of waiting out the current arrival interval, and the collected
/// handles let the driver deterministically join every in-flight customer
/// before it exits.
struct ArrivalDriver {
    gate: Arc<SlotGate>,
    queue: Arc<SyncQueue<WorkItem>>,
    wake: Arc<WakeSignal>,
    shutdown: Arc<Shutdown>,
    log: Arc<EventLog>,
    interval: Duration,
    stop_rx: Receiver<()>,
}

impl ArrivalDriver {
    fn run(self) {
        let ticker = tick(self.interval);
        let stop_rx = self.stop_rx;
        let mut next_id: u64 = 1;
        let mut customers: Vec<JoinHandle<()>> = Vec::new();

        loop {
            select! {
                recv(ticker) -> _ => {
                    if self.shutdown.is_requested() {
                        break;
                    }
                    let customer = Customer::new(
                        next_id,
                        self.gate.clone(),
                        self.queue.clone(),
                        self.wake.clone(),
                        self.log.clone(),
                    );
                    match thread::Builder::new()
                        .name(format!("customer-{next_id}"))
                        .spawn(move || customer.run())
                    {
                        Ok(handle) => customers.push(handle),
                        Err(e) => eprintln!("failed to spawn customer thread: {e}"),
                    }
                    next_id += 1;
                }
                recv(stop_rx) -> _ => break,
            }
        }

        for handle in customers {
            let _ = handle.join();
        }
    }
}
