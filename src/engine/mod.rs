// ============================================================================
// Engine Module
// Ledger operations bound to a clock, configuration and event handler
// ============================================================================

mod inventory;

pub mod factory;

pub use factory::{create_from_config, InventoryBuilder};
pub use inventory::Inventory;
