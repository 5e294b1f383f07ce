pub mod barber;
pub mod customer;
pub mod event;
pub mod gate;
pub mod log;
pub mod queue;
pub mod shop;
pub mod shutdown;
pub mod wake;
pub mod work_item;

// Re-export the surface the binary and the integration tests use.
pub use event::Event;
pub use gate::{Reservation, SlotGate};
pub use log::{EventLog, LogCapture};
pub use queue::{Dequeued, SyncQueue};
pub use shop::{BarberShop, ShopConfig};
pub use shutdown::{Shutdown, ShutdownCoordinator};
pub use wake::WakeSignal;
pub use work_item::WorkItem;
