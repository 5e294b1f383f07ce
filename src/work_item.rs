//! Work unit representation shared by customers and barbers.

use std::fmt;

/// One customer's request awaiting service.
///
/// A [`WorkItem`] is created when a customer takes a chair, travels through the
/// shared queue exactly once, and is dropped after the barber finishes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Identity of the customer that produced this item.
    pub id: u64,
    /// Human-readable description used in status lines.
    pub label: String,
}

impl WorkItem {
    /// Build the item for a given customer id.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            label: format!("customer {id}"),
        }
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
