// ============================================================================
// Parse Errors
// Error types for expiration dates, quantities and free-text notes
// ============================================================================

use thiserror::Error;

/// Errors that can occur while turning user input into ledger records.
///
/// Every variant carries the offending input so callers can report it
/// without keeping the original line around.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// Date string did not split into exactly `year-month-day`
    #[error("invalid date '{input}': expected 3 dash-separated parts, found {found}")]
    DateSegments { input: String, found: usize },

    /// One of the date segments is not an integer
    #[error("invalid date '{input}': segment '{segment}' is not an integer")]
    DateComponent { input: String, segment: String },

    /// Segments are integers but do not name a calendar day
    #[error("invalid date '{input}': {year}-{month}-{day} is not a calendar date")]
    InvalidCalendarDate {
        input: String,
        year: i64,
        month: i64,
        day: i64,
    },

    /// Quantity token is not a decimal number
    #[error("invalid quantity '{input}': not a decimal number")]
    Quantity { input: String },

    /// Note has no token left for the quantity
    #[error("note '{note}' has no quantity")]
    MissingQuantity { note: String },

    /// Note resolved to an empty title while empty titles are disallowed
    #[error("note '{note}' has an empty title")]
    EmptyTitle { note: String },
}

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;
