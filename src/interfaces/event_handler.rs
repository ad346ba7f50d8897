// ============================================================================
// Event Handler Interface
// Defines the contract for observing ledger activity
// ============================================================================

use crate::parse::ParseError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the inventory
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LedgerEvent {
    /// Batch appended under a title
    BatchAdded {
        title: String,
        quantity: Decimal,
        expiration_date: Option<NaiveDate>,
        /// True if this batch created the title
        new_title: bool,
        timestamp: DateTime<Utc>,
    },

    /// Add or note input rejected before touching the ledger
    InputRejected {
        input: String,
        reason: String,
        timestamp: DateTime<Utc>,
    },

    /// Expiry query evaluated
    ExpiryChecked {
        as_of: NaiveDate,
        cutoff: NaiveDate,
        expiring_titles: usize,
        timestamp: DateTime<Utc>,
    },
}

impl LedgerEvent {
    pub fn rejected(input: impl Into<String>, reason: &ParseError) -> Self {
        LedgerEvent::InputRejected {
            input: input.into(),
            reason: reason.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Event handler trait for processing inventory events
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a ledger event
    fn on_event(&self, event: LedgerEvent);

    /// Batch event handler
    fn on_events(&self, events: Vec<LedgerEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: LedgerEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: LedgerEvent) {
        match &event {
            LedgerEvent::InputRejected { input, reason, .. } => {
                tracing::warn!("Ledger input rejected: {:?} ({})", input, reason);
            },
            _ => tracing::debug!("Ledger event: {:?}", event),
        }
    }
}
