// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod clock;
mod event_handler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use event_handler::{EventHandler, LedgerEvent, LoggingEventHandler, NoOpEventHandler};
