// ============================================================================
// Pantry Ledger Library
// Perishable inventory tracking with exact quantities and expiry queries
// ============================================================================

//! # Pantry Ledger
//!
//! An in-memory ledger of perishable stock: every item title maps to the
//! batches bought under it, each with an exact decimal quantity and an
//! optional expiration date.
//!
//! ## Features
//!
//! - **Exact arithmetic** via `rust_decimal`, no floating-point drift
//! - **Free-text notes** like `"Eggs 4 2023-07-15"` for quick entry
//! - **Case-insensitive search** and quantity totals by title substring
//! - **Expiry reports** against an injectable clock
//! - **Event hooks** for logging or auditing every change
//!
//! ## Example
//!
//! ```rust
//! use pantry_ledger::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let mut inventory = InventoryBuilder::new()
//!     .with_clock(Arc::new(FixedClock::from_ymd(2023, 7, 16).unwrap()))
//!     .with_event_handler(Arc::new(LoggingEventHandler))
//!     .build()
//!     .unwrap();
//!
//! inventory.add_by_note("Eggs 4 2023-07-15").unwrap();
//! inventory.add("Milk", Decimal::from(2), None).unwrap();
//!
//! assert_eq!(inventory.find("egg"), vec!["Eggs".to_string()]);
//! assert_eq!(inventory.amount("egg"), Decimal::from(4));
//! assert_eq!(inventory.expire(0), vec![("Eggs".to_string(), Decimal::from(4))]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod parse;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Batch, Entry, Ledger, LedgerConfig};
    pub use crate::engine::{create_from_config, Inventory, InventoryBuilder};
    pub use crate::interfaces::{
        Clock, EventHandler, FixedClock, LedgerEvent, LoggingEventHandler, NoOpEventHandler,
        SystemClock,
    };
    pub use crate::parse::{DateDetection, Note, NoteParser, ParseError, ParseResult};
}
