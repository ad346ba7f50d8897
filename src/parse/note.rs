// ============================================================================
// Note Parsing
// Turns a free-text line like "Eggs 4 2023-07-15" into a ledger record
// ============================================================================

use super::date::{parse_expiration_date, parse_quantity, DATE_TOKEN_LEN};
use super::errors::{ParseError, ParseResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a note decides whether its last token is an expiration date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DateDetection {
    /// Last token is a date iff it is exactly 10 characters long.
    ///
    /// Only the length is checked: a 10-character token that is not a date
    /// fails in date parsing, and one that happens to split into three
    /// integers yields whatever date those integers name.
    #[default]
    TokenLength,

    /// Last token is a date iff it parses as one; otherwise it is the quantity.
    ParseAttempt,
}

/// A parsed note, ready to be appended to a ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub title: String,
    pub quantity: Decimal,
    pub expiration_date: Option<NaiveDate>,
}

/// Parser for free-text notes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteParser {
    detection: DateDetection,
    allow_empty_title: bool,
}

impl Default for NoteParser {
    fn default() -> Self {
        Self::new(DateDetection::TokenLength)
    }
}

impl NoteParser {
    pub fn new(detection: DateDetection) -> Self {
        Self {
            detection,
            allow_empty_title: true,
        }
    }

    /// Builder method: accept or reject notes without title tokens
    pub fn allow_empty_title(mut self, allow: bool) -> Self {
        self.allow_empty_title = allow;
        self
    }

    pub fn detection(&self) -> DateDetection {
        self.detection
    }

    /// Parse a note into title, quantity and optional expiration date.
    ///
    /// Tokens are separated by single spaces, so repeated spaces produce
    /// empty tokens that end up inside the title. Trailing spaces are
    /// trimmed from the assembled title.
    pub fn parse(&self, note: &str) -> ParseResult<Note> {
        let tokens: Vec<&str> = note.split(' ').collect();
        let (last, rest) = match tokens.split_last() {
            Some((last, rest)) if !(rest.is_empty() && last.is_empty()) => (*last, rest),
            _ => return Err(missing_quantity(note)),
        };

        let date_token = self.has_date(last).then_some(last);
        let (title_tokens, quantity_token) = match date_token {
            Some(_) => {
                let (quantity, title) = rest.split_last().ok_or_else(|| missing_quantity(note))?;
                (title, *quantity)
            },
            None => (rest, last),
        };

        // Quantity errors take precedence over date errors
        let quantity = parse_quantity(quantity_token)?;
        let expiration_date = date_token.map(parse_expiration_date).transpose()?;
        let title = title_tokens.join(" ").trim_end_matches(' ').to_string();

        if title.is_empty() && !self.allow_empty_title {
            return Err(ParseError::EmptyTitle {
                note: note.to_string(),
            });
        }

        Ok(Note {
            title,
            quantity,
            expiration_date,
        })
    }

    fn has_date(&self, token: &str) -> bool {
        match self.detection {
            DateDetection::TokenLength => token.chars().count() == DATE_TOKEN_LEN,
            DateDetection::ParseAttempt => parse_expiration_date(token).is_ok(),
        }
    }
}

fn missing_quantity(note: &str) -> ParseError {
    ParseError::MissingQuantity {
        note: note.to_string(),
    }
}
