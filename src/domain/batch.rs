// ============================================================================
// Batch Domain Model
// ============================================================================

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One recorded purchase of an item: a quantity and an optional expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Batch {
    /// Quantity added; zero and negative values are kept as given
    pub quantity: Decimal,

    /// Calendar day the batch expires on, if known
    pub expiration_date: Option<NaiveDate>,
}

impl Batch {
    pub fn new(quantity: Decimal, expiration_date: Option<NaiveDate>) -> Self {
        Self {
            quantity,
            expiration_date,
        }
    }

    /// Batch without an expiration date
    pub fn without_expiry(quantity: Decimal) -> Self {
        Self::new(quantity, None)
    }

    /// True if the batch has an expiration date on or before `cutoff`.
    ///
    /// Batches without a date never expire.
    #[inline]
    pub fn expires_by(&self, cutoff: NaiveDate) -> bool {
        self.expiration_date.is_some_and(|date| date <= cutoff)
    }
}

/// Last day counted as expiring when looking `in_advance_days` past `today`.
///
/// Saturates at the latest representable date instead of overflowing.
pub fn expiry_cutoff(today: NaiveDate, in_advance_days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(in_advance_days)))
        .unwrap_or(NaiveDate::MAX)
}
