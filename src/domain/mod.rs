// ============================================================================
// Domain Models Module
// Contains the ledger, its batches and configuration
// ============================================================================

pub mod batch;
pub mod config;
pub mod ledger;

pub use batch::{expiry_cutoff, Batch};
pub use config::{LedgerConfig, MAX_IN_ADVANCE_DAYS};
pub use ledger::{Entry, Ledger};
