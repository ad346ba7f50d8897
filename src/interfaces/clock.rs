// ============================================================================
// Clock Interface
// Source of "today" for expiry queries
// ============================================================================

use chrono::{Local, NaiveDate};

/// Capability that supplies the current calendar date.
///
/// `expire` reads it exactly once per call, so a query never straddles
/// midnight.
pub trait Clock: Send + Sync {
    /// Today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date, for tests and replays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self(today)
    }

    /// Fixed clock from calendar parts; `None` if they do not form a date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::from_ymd(2023, 7, 16).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2023, 7, 16).unwrap());
        assert!(FixedClock::from_ymd(2023, 2, 30).is_none());
    }

    #[test]
    fn test_system_clock_reads_local_date() {
        let before = Local::now().date_naive();
        let today = SystemClock.today();
        let after = Local::now().date_naive();
        // Equal to the local date unless the test runs across midnight
        assert!(before <= today && today <= after);
        assert!(today == before || today == after);
    }
}
