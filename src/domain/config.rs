// ============================================================================
// Ledger Configuration
// Note parsing behavior and expiry defaults
// ============================================================================

use crate::parse::{DateDetection, NoteParser};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest expiry horizon that still fits the calendar range
/// (days from 0001-01-01 to 9999-12-31)
pub const MAX_IN_ADVANCE_DAYS: u32 = 3_652_058;

/// Configuration for an inventory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedgerConfig {
    /// How notes decide whether the last token is an expiration date
    pub date_detection: DateDetection,

    /// Whether a note without title tokens (e.g. "5 2023-07-15") is accepted
    pub allow_empty_title: bool,

    /// Horizon used by `expire_default`, in days past today
    pub default_in_advance_days: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DateDetection::TokenLength)
    }
}

impl LedgerConfig {
    /// Create a new configuration with the given date detection strategy
    pub fn new(date_detection: DateDetection) -> Self {
        Self {
            date_detection,
            allow_empty_title: true,
            default_in_advance_days: 0,
        }
    }

    /// Builder method: Set date detection strategy
    pub fn with_date_detection(mut self, detection: DateDetection) -> Self {
        self.date_detection = detection;
        self
    }

    /// Builder method: Accept or reject notes with an empty title
    pub fn with_empty_titles(mut self, allow: bool) -> Self {
        self.allow_empty_title = allow;
        self
    }

    /// Builder method: Set the default expiry horizon
    pub fn with_default_in_advance_days(mut self, days: u32) -> Self {
        self.default_in_advance_days = days;
        self
    }

    /// Note parser matching this configuration
    pub fn note_parser(&self) -> NoteParser {
        NoteParser::new(self.date_detection).allow_empty_title(self.allow_empty_title)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_in_advance_days > MAX_IN_ADVANCE_DAYS {
            return Err(format!(
                "Default expiry horizon of {} days exceeds the calendar range ({} days)",
                self.default_in_advance_days, MAX_IN_ADVANCE_DAYS
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl LedgerConfig {
    /// Accepts the same notes as the classic pantry script
    /// - 10-character last token is a date
    /// - Empty titles allowed
    pub fn compatible() -> Self {
        Self::new(DateDetection::TokenLength)
    }

    /// Stricter note handling
    /// - Last token is a date only if it parses as one
    /// - Empty titles rejected
    pub fn strict() -> Self {
        Self::new(DateDetection::ParseAttempt).with_empty_titles(false)
    }

    /// Shopping reminder setup: flag anything expiring within the next `days`
    pub fn weekly_review(days: u32) -> Self {
        Self::compatible().with_default_in_advance_days(days)
    }
}
