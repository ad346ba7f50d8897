// ============================================================================
// Parse Module
// Input parsing for expiration dates, quantities and free-text notes
// ============================================================================
//
// This module provides:
// - parse_expiration_date / parse_quantity: the primitives used by `add`
// - NoteParser: splits a note line into title, quantity and optional date
// - ParseError: the single error type of the add path
//
// Everything here is pure: parsing never touches a ledger, so a failure
// cannot leave a half-written record behind.

mod date;
mod errors;
mod note;

pub use date::{parse_expiration_date, parse_quantity, DATE_TOKEN_LEN, MAX_YEAR, MIN_YEAR};
pub use errors::{ParseError, ParseResult};
pub use note::{DateDetection, Note, NoteParser};
