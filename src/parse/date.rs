// ============================================================================
// Expiration Date and Quantity Parsing
// ============================================================================

use super::errors::{ParseError, ParseResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Length of a `YYYY-MM-DD` date string
pub const DATE_TOKEN_LEN: usize = 10;

/// Earliest year accepted for an expiration date
pub const MIN_YEAR: i64 = 1;

/// Latest year accepted for an expiration date
pub const MAX_YEAR: i64 = 9999;

/// Parse an expiration date written as `YYYY-MM-DD`.
///
/// The string is split on `-` into exactly three integer segments. Segment
/// width is not checked, so `2023-7-5` is accepted as well.
///
/// # Errors
/// - `DateSegments` if there are not exactly three segments
/// - `DateComponent` if a segment is not an integer
/// - `InvalidCalendarDate` if the numbers do not form a calendar day
pub fn parse_expiration_date(input: &str) -> ParseResult<NaiveDate> {
    let segments: Vec<&str> = input.split('-').collect();
    if segments.len() != 3 {
        return Err(ParseError::DateSegments {
            input: input.to_string(),
            found: segments.len(),
        });
    }

    let mut parts = [0i64; 3];
    for (slot, segment) in parts.iter_mut().zip(&segments) {
        *slot = segment
            .trim()
            .parse::<i64>()
            .map_err(|_| ParseError::DateComponent {
                input: input.to_string(),
                segment: segment.to_string(),
            })?;
    }
    let [year, month, day] = parts;

    let invalid = || ParseError::InvalidCalendarDate {
        input: input.to_string(),
        year,
        month,
        day,
    };

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(invalid());
    }
    let month_u32 = u32::try_from(month).map_err(|_| invalid())?;
    let day_u32 = u32::try_from(day).map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year as i32, month_u32, day_u32).ok_or_else(invalid)
}

/// Parse a quantity token as an exact decimal.
///
/// Accepts plain notation (`4`, `-1.5`, `+2`) and scientific notation
/// (`1e3`, `2.5E-1`).
pub fn parse_quantity(input: &str) -> ParseResult<Decimal> {
    let invalid = || ParseError::Quantity {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    Decimal::from_str(trimmed)
        .or_else(|err| {
            if trimmed.contains(['e', 'E']) {
                Decimal::from_scientific(trimmed)
            } else {
                Err(err)
            }
        })
        .map_err(|_| invalid())
}
