// ============================================================================
// Inventory
// Ledger operations wired to a clock, a note parser and an event handler
// ============================================================================

use crate::domain::{expiry_cutoff, Batch, Ledger, LedgerConfig};
use crate::interfaces::{Clock, EventHandler, LedgerEvent};
use crate::parse::{parse_expiration_date, NoteParser, ParseResult};
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Inventory owning one ledger.
///
/// Adds go through the configured note parser and are reported to the
/// event handler; `expire` reads "today" from the injected clock once per
/// call.
pub struct Inventory {
    ledger: Ledger,

    /// Note parser derived from the configuration
    parser: NoteParser,

    config: LedgerConfig,

    clock: Arc<dyn Clock>,

    event_handler: Arc<dyn EventHandler>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new(
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self::with_ledger(Ledger::new(), config, clock, event_handler)
    }

    /// Wrap an existing ledger
    pub fn with_ledger(
        ledger: Ledger,
        config: LedgerConfig,
        clock: Arc<dyn Clock>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            ledger,
            parser: config.note_parser(),
            config,
            clock,
            event_handler,
        }
    }

    /// Append a batch with an optional `YYYY-MM-DD` expiration date
    pub fn add(
        &mut self,
        title: impl Into<String>,
        quantity: Decimal,
        expiration_date: Option<&str>,
    ) -> ParseResult<()> {
        let title = title.into();
        let parsed = match expiration_date.map(parse_expiration_date).transpose() {
            Ok(parsed) => parsed,
            Err(err) => {
                let input = format!(
                    "{} {} {}",
                    title,
                    quantity,
                    expiration_date.unwrap_or_default()
                );
                self.event_handler.on_event(LedgerEvent::rejected(input, &err));
                return Err(err);
            },
        };

        self.record(title, Batch::new(quantity, parsed));
        Ok(())
    }

    /// Parse a free-text note and append it
    pub fn add_by_note(&mut self, note: &str) -> ParseResult<()> {
        let parsed = match self.parser.parse(note) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.event_handler.on_event(LedgerEvent::rejected(note, &err));
                return Err(err);
            },
        };

        self.record(
            parsed.title,
            Batch::new(parsed.quantity, parsed.expiration_date),
        );
        Ok(())
    }

    /// Parse and append several notes, stopping at the first failure.
    ///
    /// Notes before the failing one stay recorded. Returns how many were
    /// added.
    pub fn add_notes<'a, I>(&mut self, notes: I) -> ParseResult<usize>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = 0;
        for note in notes {
            self.add_by_note(note)?;
            added += 1;
        }
        Ok(added)
    }

    /// Titles containing `needle`, case-insensitively
    pub fn find(&self, needle: &str) -> Vec<String> {
        self.ledger.find(needle)
    }

    /// Total quantity under titles containing `needle`
    pub fn amount(&self, needle: &str) -> Decimal {
        self.ledger.amount(needle)
    }

    /// Titles with a positive quantity expiring within `in_advance_days`
    pub fn expire(&self, in_advance_days: u32) -> Vec<(String, Decimal)> {
        let today = self.clock.today();
        let expiring = self.ledger.expire_as_of(today, in_advance_days);

        self.event_handler.on_event(LedgerEvent::ExpiryChecked {
            as_of: today,
            cutoff: expiry_cutoff(today, in_advance_days),
            expiring_titles: expiring.len(),
            timestamp: Utc::now(),
        });

        expiring
    }

    /// `expire` using the configured default horizon
    pub fn expire_default(&self) -> Vec<(String, Decimal)> {
        self.expire(self.config.default_in_advance_days)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Give up the inventory, keeping its ledger
    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn record(&mut self, title: String, batch: Batch) {
        let new_title = self.ledger.add_batch(title.clone(), batch);
        self.event_handler.on_event(LedgerEvent::BatchAdded {
            title,
            quantity: batch.quantity,
            expiration_date: batch.expiration_date,
            new_title,
            timestamp: Utc::now(),
        });
    }
}
