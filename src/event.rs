//! The closed set of observable simulation events.
//!
//! Every status line the simulation can print corresponds to one variant here.
//! The exact wording is presentation; the set of events and their triggering
//! conditions is the contract the tests check against.

use std::fmt;
use std::time::Duration;

/// One observable occurrence inside the shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A customer walked in (before looking at the chairs).
    CustomerArrived { id: u64 },
    /// A customer found no free chair and left without enqueuing.
    CustomerLeft { id: u64 },
    /// A barber found the waiting room empty and parked.
    BarberSleeps { barber: usize },
    /// A parked barber received a wake signal.
    BarberWakes { barber: usize },
    /// A barber dequeued an item and starts the simulated service.
    ServiceStarted {
        barber: usize,
        label: String,
        duration: Duration,
    },
    /// A barber's bounded dequeue wait elapsed with no work and no shutdown.
    QueueWaitTimeout { barber: usize },
    /// A barber observed shutdown with an empty queue and terminated.
    BarberStopped { barber: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::CustomerArrived { id } => write!(f, "Customer {id} arrived!"),
            Event::CustomerLeft { id } => {
                write!(f, "Customer {id} left, since no chair is available!")
            }
            Event::BarberSleeps { barber } => write!(f, "Barber {barber} begins to sleep!"),
            Event::BarberWakes { barber } => write!(f, "Barber {barber} wakes up!"),
            Event::ServiceStarted {
                barber,
                label,
                duration,
            } => write!(
                f,
                "Barber {barber} is working for ({label}), it will take {duration:?}."
            ),
            Event::QueueWaitTimeout { barber } => {
                write!(f, "Barber {barber} is still waiting for customers...")
            }
            Event::BarberStopped { barber } => write!(f, "Barber {barber} finished waiting!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_line_mentions_missing_chair() {
        let line = Event::CustomerLeft { id: 4 }.to_string();
        assert!(line.contains("no chair"));
    }

    #[test]
    fn service_line_carries_label_and_duration() {
        let line = Event::ServiceStarted {
            barber: 1,
            label: "customer 2".to_string(),
            duration: Duration::from_secs(3),
        }
        .to_string();
        assert!(line.contains("customer 2"));
        assert!(line.contains("3s"));
    }
}
