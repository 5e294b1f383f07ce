// Whole-shop scenarios: wiring the gate, queue, wake signal, and threads
// together and checking the observable event stream plus the final state.

use std::sync::Arc;
use std::time::{Duration, Instant};

use barbershop::{
    BarberShop, Dequeued, EventLog, Reservation, ShopConfig, SlotGate, SyncQueue, WakeSignal,
    WorkItem,
};

/// Millisecond-scale timings so a full run fits in a test.
fn fast_config(chairs: usize, barbers: usize) -> ShopConfig {
    ShopConfig {
        chairs,
        barbers,
        arrival_interval: Duration::from_millis(10),
        dequeue_timeout: Duration::from_millis(100),
        service_min: Duration::from_millis(1),
        service_max: Duration::from_millis(3),
    }
}

#[test]
fn capacity_one_arrival_sequence() {
    // Scenario: A takes the only chair (first arrival), B is turned away,
    // the barber wakes, serves A, and the shop returns to its idle state.
    let gate = Arc::new(SlotGate::new(1));
    let queue: Arc<SyncQueue<WorkItem>> = Arc::new(SyncQueue::new());
    let wake = Arc::new(WakeSignal::new());

    // Customer A: room fully empty, so reserve + enqueue + signal.
    assert_eq!(gate.try_reserve(), Reservation::FirstArrival);
    queue.enqueue(WorkItem::new(1));
    wake.notify();
    assert_eq!(gate.available(), 0);

    // Customer B: no free chair, leaves without touching the queue.
    assert_eq!(gate.try_reserve(), Reservation::Rejected);
    assert_eq!(queue.len(), 1);

    // Barber: consumes the signal, dequeues A's item, frees the chair.
    assert!(wake.wait(Duration::from_millis(10)));
    match queue.dequeue(Duration::from_millis(10)) {
        Dequeued::Item(item) => assert_eq!(item.id, 1),
        other => panic!("expected A's item, got {other:?}"),
    }
    gate.release();

    assert!(queue.is_empty());
    assert_eq!(gate.available(), 1);
}

#[test]
fn immediate_shutdown_terminates_idle_barbers_within_one_timeout() {
    // Scenario: capacity 2, no customer ever arrives, shutdown right away.
    let config = ShopConfig {
        arrival_interval: Duration::from_secs(60),
        ..fast_config(2, 1)
    };
    let timeout = config.dequeue_timeout;
    let (log, capture) = EventLog::capture();
    let shop = BarberShop::new(config, log).expect("valid config");
    shop.start().expect("threads spawn");

    let start = Instant::now();
    shop.shutdown();
    shop.join();
    let elapsed = start.elapsed();

    // One dequeue timeout plus scheduling slack.
    assert!(
        elapsed < timeout + Duration::from_secs(1),
        "shutdown took {elapsed:?}"
    );

    let lines = capture.lines();
    assert!(!lines.iter().any(|l| l.contains("is working")));
    assert!(lines.iter().any(|l| l.contains("finished waiting")));
    assert_eq!(shop.gate().available(), 2);
}

#[test]
fn sleeping_barber_is_woken_before_the_first_service() {
    let config = ShopConfig {
        arrival_interval: Duration::from_millis(50),
        ..fast_config(3, 1)
    };
    let (log, capture) = EventLog::capture();
    let shop = BarberShop::new(config, log).expect("valid config");
    shop.start().expect("threads spawn");

    // Long enough for the barber to park and at least one customer to land.
    std::thread::sleep(Duration::from_millis(250));
    shop.shutdown();
    shop.join();

    let lines = capture.lines();
    let sleep_at = lines.iter().position(|l| l.contains("begins to sleep"));
    let wake_at = lines.iter().position(|l| l.contains("wakes up"));
    let work_at = lines.iter().position(|l| l.contains("is working"));

    let sleep_at = sleep_at.expect("barber parked on the empty room");
    let wake_at = wake_at.expect("first arrival woke the barber");
    let work_at = work_at.expect("the woken barber serviced the arrival");
    assert!(sleep_at < wake_at);
    assert!(wake_at < work_at);
}

#[test]
fn sustained_run_preserves_the_slot_invariant() {
    let (log, capture) = EventLog::capture();
    let shop = BarberShop::new(fast_config(3, 2), log).expect("valid config");
    shop.start().expect("threads spawn");

    std::thread::sleep(Duration::from_millis(300));
    shop.shutdown();
    shop.join();

    // Every reservation was either serviced (slot released) or is still
    // represented by a queued item, so the books balance exactly.
    let capacity = shop.gate().capacity();
    assert_eq!(shop.gate().available() + shop.queue().len(), capacity);

    let lines = capture.lines();
    assert!(lines.iter().any(|l| l.contains("arrived")));
    assert!(lines.iter().any(|l| l.contains("is working")));
}

#[test]
fn overloaded_shop_turns_customers_away_without_queueing_them() {
    // One chair, service far slower than arrivals: rejections must show up
    // and the queue must never hold more than the reservations allow.
    let config = ShopConfig {
        chairs: 1,
        barbers: 1,
        arrival_interval: Duration::from_millis(5),
        dequeue_timeout: Duration::from_millis(100),
        service_min: Duration::from_millis(40),
        service_max: Duration::from_millis(60),
    };
    let (log, capture) = EventLog::capture();
    let shop = BarberShop::new(config, log).expect("valid config");
    shop.start().expect("threads spawn");

    std::thread::sleep(Duration::from_millis(300));
    shop.shutdown();
    shop.join();

    let lines = capture.lines();
    assert!(lines.iter().any(|l| l.contains("no chair")));
    assert_eq!(shop.gate().available() + shop.queue().len(), 1);
}

#[test]
fn no_customer_is_spawned_after_shutdown() {
    let config = ShopConfig {
        arrival_interval: Duration::from_millis(10),
        ..fast_config(2, 1)
    };
    let (log, capture) = EventLog::capture();
    let shop = BarberShop::new(config, log).expect("valid config");
    shop.start().expect("threads spawn");

    std::thread::sleep(Duration::from_millis(100));
    shop.shutdown();
    shop.join();
    let arrivals_at_join = capture
        .lines()
        .iter()
        .filter(|l| l.contains("arrived"))
        .count();

    // The driver is gone; the arrival count must stay frozen.
    std::thread::sleep(Duration::from_millis(100));
    let arrivals_later = capture
        .lines()
        .iter()
        .filter(|l| l.contains("arrived"))
        .count();
    assert_eq!(arrivals_at_join, arrivals_later);
}
