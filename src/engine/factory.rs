// ============================================================================
// Inventory Factory
// Creates inventories with proper configuration
// ============================================================================

use crate::domain::{Ledger, LedgerConfig};
use crate::engine::Inventory;
use crate::interfaces::{Clock, EventHandler, NoOpEventHandler, SystemClock};
use crate::parse::DateDetection;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an inventory from configuration
///
/// # Arguments
/// * `config` - Ledger configuration
/// * `clock` - Source of today's date for expiry queries
/// * `event_handler` - Event handler for ledger events
///
/// # Example
/// ```
/// use pantry_ledger::prelude::*;
/// use std::sync::Arc;
///
/// let inventory = create_from_config(
///     LedgerConfig::compatible(),
///     Arc::new(SystemClock),
///     Arc::new(NoOpEventHandler),
/// )
/// .unwrap();
/// assert!(inventory.ledger().is_empty());
/// ```
pub fn create_from_config(
    config: LedgerConfig,
    clock: Arc<dyn Clock>,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Inventory, String> {
    config.validate()?;
    Ok(Inventory::new(config, clock, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating inventories with fluent API
///
/// # Example
/// ```
/// use pantry_ledger::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let mut inventory = InventoryBuilder::new()
///     .parse_attempt_dates()
///     .with_clock(Arc::new(FixedClock::from_ymd(2023, 7, 16).unwrap()))
///     .build()
///     .unwrap();
///
/// inventory.add_by_note("Eggs 4 2023-07-15").unwrap();
/// assert_eq!(inventory.expire(0), vec![("Eggs".to_string(), Decimal::from(4))]);
/// ```
pub struct InventoryBuilder {
    config: LedgerConfig,
    ledger: Ledger,
    clock: Arc<dyn Clock>,
    event_handler: Arc<dyn EventHandler>,
}

impl Default for InventoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryBuilder {
    /// Create a builder with the compatible configuration, the system clock
    /// and no event handling
    pub fn new() -> Self {
        Self {
            config: LedgerConfig::compatible(),
            ledger: Ledger::new(),
            clock: Arc::new(SystemClock),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    // ========================================================================
    // Note Parsing Configuration
    // ========================================================================

    /// Treat a 10-character last token as a date (default)
    pub fn token_length_dates(mut self) -> Self {
        self.config.date_detection = DateDetection::TokenLength;
        self
    }

    /// Treat the last token as a date only if it parses as one
    pub fn parse_attempt_dates(mut self) -> Self {
        self.config.date_detection = DateDetection::ParseAttempt;
        self
    }

    /// Accept or reject notes without a title
    pub fn allow_empty_titles(mut self, allow: bool) -> Self {
        self.config.allow_empty_title = allow;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Set the horizon used by `expire_default`
    pub fn with_default_in_advance_days(mut self, days: u32) -> Self {
        self.config.default_in_advance_days = days;
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: LedgerConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing ledger instead of an empty one
    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the inventory
    pub fn build(self) -> Result<Inventory, String> {
        self.config.validate()?;
        Ok(Inventory::with_ledger(
            self.ledger,
            self.config,
            self.clock,
            self.event_handler,
        ))
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &LedgerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_IN_ADVANCE_DAYS;
    use crate::interfaces::FixedClock;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_from_config() {
        let inventory = create_from_config(
            LedgerConfig::strict(),
            Arc::new(SystemClock),
            Arc::new(NoOpEventHandler),
        )
        .unwrap();
        assert_eq!(inventory.config(), &LedgerConfig::strict());
    }

    #[test]
    fn test_create_from_invalid_config() {
        let config = LedgerConfig::default().with_default_in_advance_days(MAX_IN_ADVANCE_DAYS + 1);
        let result = create_from_config(config, Arc::new(SystemClock), Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let builder = InventoryBuilder::new()
            .parse_attempt_dates()
            .allow_empty_titles(false)
            .with_default_in_advance_days(3);

        assert_eq!(builder.get_config().date_detection, DateDetection::ParseAttempt);
        assert!(!builder.get_config().allow_empty_title);
        assert_eq!(builder.get_config().default_in_advance_days, 3);

        let builder = builder.token_length_dates();
        assert_eq!(builder.get_config().date_detection, DateDetection::TokenLength);
    }

    #[test]
    fn test_builder_with_existing_ledger() {
        let mut ledger = Ledger::new();
        ledger.add("Rice", Decimal::from(2), Some("2024-01-01")).unwrap();

        let mut inventory = InventoryBuilder::new()
            .with_ledger(ledger)
            .with_clock(Arc::new(FixedClock::from_ymd(2024, 1, 1).unwrap()))
            .build()
            .unwrap();
        inventory.add_by_note("Rice 1").unwrap();

        assert_eq!(inventory.amount("rice"), Decimal::from(3));
        assert_eq!(
            inventory.expire(0),
            vec![("Rice".to_string(), Decimal::from(2))]
        );
        assert_eq!(inventory.into_ledger().batch_count(), 2);
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let result = InventoryBuilder::new()
            .with_default_in_advance_days(u32::MAX)
            .build();
        assert!(result.is_err());
    }
}
