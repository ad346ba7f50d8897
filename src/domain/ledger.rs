// ============================================================================
// Ledger Domain Model
// Title -> ordered, append-only sequence of batches
// ============================================================================

use super::batch::{expiry_cutoff, Batch};
use crate::interfaces::Clock;
use crate::parse::{parse_expiration_date, Note, NoteParser, ParseResult};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Ledger Entry
// ============================================================================

/// All batches recorded under one title, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    pub title: String,
    pub batches: Vec<Batch>,
}

impl Entry {
    /// Sum of all batch quantities, saturating at `Decimal::MAX`/`MIN`
    pub fn total(&self) -> Decimal {
        saturating_sum(self.batches.iter().map(|batch| batch.quantity))
    }

    /// Sum of quantities of batches expiring on or before `cutoff`, saturating
    pub fn expiring_total(&self, cutoff: NaiveDate) -> Decimal {
        saturating_sum(
            self.batches
                .iter()
                .filter(|batch| batch.expires_by(cutoff))
                .map(|batch| batch.quantity),
        )
    }

    /// Case-insensitive substring match against the title
    fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
    }
}

// ============================================================================
// Ledger
// ============================================================================

/// In-memory inventory ledger.
///
/// Titles keep their original case and are grouped by exact string; searches
/// compare lower-cased text. Iteration follows the order in which titles were
/// first added. A title only exists once it has at least one batch.
///
/// # Example
/// ```
/// use pantry_ledger::domain::Ledger;
/// use rust_decimal::Decimal;
///
/// let mut ledger = Ledger::new();
/// ledger.add_by_note("Eggs 4 2023-07-15").unwrap();
/// ledger.add("Milk", Decimal::from(2), None).unwrap();
///
/// assert_eq!(ledger.find("egg"), vec!["Eggs".to_string()]);
/// assert_eq!(ledger.amount("i"), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Entry>", into = "Vec<Entry>"))]
pub struct Ledger {
    /// Entries in first-insertion order
    entries: Vec<Entry>,

    /// Title -> position in `entries`
    index: HashMap<String, usize>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append a batch, parsing the optional `YYYY-MM-DD` expiration date.
    ///
    /// The date is parsed before anything is written, so on error the ledger
    /// is unchanged.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        quantity: Decimal,
        expiration_date: Option<&str>,
    ) -> ParseResult<()> {
        let expiration_date = expiration_date.map(parse_expiration_date).transpose()?;
        self.add_batch(title, Batch::new(quantity, expiration_date));
        Ok(())
    }

    /// Parse a free-text note with the default parser and append it
    pub fn add_by_note(&mut self, note: &str) -> ParseResult<()> {
        self.add_by_note_with(&NoteParser::default(), note)
    }

    /// Parse a free-text note with `parser` and append it
    pub fn add_by_note_with(&mut self, parser: &NoteParser, note: &str) -> ParseResult<()> {
        let note = parser.parse(note)?;
        self.add_note(note);
        Ok(())
    }

    /// Append an already parsed note
    pub fn add_note(&mut self, note: Note) -> bool {
        self.add_batch(note.title, Batch::new(note.quantity, note.expiration_date))
    }

    /// Append a batch to the end of the title's sequence.
    ///
    /// Returns true if the title was new.
    pub fn add_batch(&mut self, title: impl Into<String>, batch: Batch) -> bool {
        let title = title.into();
        match self.index.get(&title) {
            Some(&position) => {
                self.entries[position].batches.push(batch);
                false
            },
            None => {
                self.index.insert(title.clone(), self.entries.len());
                self.entries.push(Entry {
                    title,
                    batches: vec![batch],
                });
                true
            },
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Titles containing `needle`, compared case-insensitively.
    ///
    /// An empty needle matches every title.
    pub fn find(&self, needle: &str) -> Vec<String> {
        self.matching(needle)
            .map(|entry| entry.title.clone())
            .collect()
    }

    /// Total quantity over every batch of every title matching `needle`.
    ///
    /// Sums saturate at `Decimal::MAX`/`Decimal::MIN` instead of overflowing.
    pub fn amount(&self, needle: &str) -> Decimal {
        saturating_sum(self.matching(needle).map(Entry::total))
    }

    /// Per-title quantity expiring on or before `today + in_advance_days`.
    ///
    /// Only titles whose expiring sum is strictly positive are reported.
    /// Batches without an expiration date are ignored. Sums saturate like
    /// `amount`.
    pub fn expire_as_of(&self, today: NaiveDate, in_advance_days: u32) -> Vec<(String, Decimal)> {
        let cutoff = expiry_cutoff(today, in_advance_days);
        self.entries
            .iter()
            .filter_map(|entry| {
                let total = entry.expiring_total(cutoff);
                (total > Decimal::ZERO).then(|| (entry.title.clone(), total))
            })
            .collect()
    }

    /// `expire_as_of` with today's date read once from `clock`
    pub fn expire_with(&self, clock: &dyn Clock, in_advance_days: u32) -> Vec<(String, Decimal)> {
        self.expire_as_of(clock.today(), in_advance_days)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Batches recorded under the exact title, oldest first
    pub fn batches(&self, title: &str) -> Option<&[Batch]> {
        self.index
            .get(title)
            .map(|&position| self.entries[position].batches.as_slice())
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    /// Titles in first-insertion order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.title.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of titles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of batches across all titles
    pub fn batch_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.batches.len()).sum()
    }

    fn matching<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Entry> + 'a {
        let needle_lower = needle.to_lowercase();
        self.entries
            .iter()
            .filter(move |entry| entry.matches(&needle_lower))
    }
}

fn saturating_sum(quantities: impl Iterator<Item = Decimal>) -> Decimal {
    quantities.fold(Decimal::ZERO, Decimal::saturating_add)
}

impl From<Vec<Entry>> for Ledger {
    /// Rebuild a ledger from entries, merging repeated titles and dropping
    /// entries without batches.
    fn from(entries: Vec<Entry>) -> Self {
        let mut ledger = Ledger::new();
        for entry in entries {
            for batch in entry.batches {
                ledger.add_batch(entry.title.clone(), batch);
            }
        }
        ledger
    }
}

impl From<Ledger> for Vec<Entry> {
    fn from(ledger: Ledger) -> Self {
        ledger.entries
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::FixedClock;
    use crate::parse::ParseError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_creates_and_appends() {
        let mut ledger = Ledger::new();
        ledger
            .add("Eggs", Decimal::from(4), Some("2023-07-15"))
            .unwrap();
        ledger.add("Eggs", Decimal::from(3), None).unwrap();

        let batches = ledger.batches("Eggs").unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], Batch::new(Decimal::from(4), Some(date(2023, 7, 15))));
        assert_eq!(batches[1], Batch::without_expiry(Decimal::from(3)));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.batch_count(), 2);
    }

    #[test]
    fn test_add_keeps_zero_and_negative_quantities() {
        let mut ledger = Ledger::new();
        ledger.add("Flour", Decimal::ZERO, None).unwrap();
        ledger.add("Flour", dec("-0.5"), None).unwrap();
        assert_eq!(ledger.amount("flour"), dec("-0.5"));
    }

    #[test]
    fn test_add_with_bad_date_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        let result = ledger.add("Eggs", Decimal::from(4), Some("2023-13-01"));
        assert!(matches!(result, Err(ParseError::InvalidCalendarDate { .. })));
        assert!(ledger.is_empty());
        assert!(!ledger.contains_title("Eggs"));
    }

    #[test]
    fn test_titles_grouped_by_exact_string() {
        let mut ledger = Ledger::new();
        ledger.add("Eggs", Decimal::ONE, None).unwrap();
        ledger.add("eggs", Decimal::ONE, None).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.find("EGGS"), vec!["Eggs".to_string(), "eggs".to_string()]);
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let mut ledger = Ledger::new();
        for title in ["Tomato juice", "Milk", "Tomatoes", "Apple juice"] {
            ledger.add(title, Decimal::ONE, None).unwrap();
        }
        assert_eq!(
            ledger.find("juice"),
            vec!["Tomato juice".to_string(), "Apple juice".to_string()]
        );
        assert_eq!(ledger.find("").len(), 4);
        assert!(ledger.find("bread").is_empty());
    }

    #[test]
    fn test_amount_is_exact() {
        let mut ledger = Ledger::new();
        for _ in 0..10 {
            ledger.add("Sugar", dec("0.1"), None).unwrap();
        }
        ledger.add("Salt", dec("0.2"), None).unwrap();

        assert_eq!(ledger.amount("sugar"), Decimal::ONE);
        assert_eq!(ledger.amount("s"), dec("1.2"));
        assert_eq!(ledger.amount("pepper"), Decimal::ZERO);
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        ledger
            .add_by_note("Rice 79228162514264337593543950335 2023-07-10")
            .unwrap();
        ledger.add_by_note("Rice 1 2023-07-11").unwrap();
        ledger.add("Rice bran", Decimal::MAX, None).unwrap();
        ledger.add("Debt", Decimal::MIN, None).unwrap();
        ledger.add("Debt", Decimal::NEGATIVE_ONE, None).unwrap();

        assert_eq!(ledger.amount("rice"), Decimal::MAX);
        assert_eq!(ledger.amount("debt"), Decimal::MIN);
        assert_eq!(
            ledger.expire_as_of(date(2023, 7, 16), 0),
            vec![("Rice".to_string(), Decimal::MAX)]
        );
    }

    #[test]
    fn test_expire_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_by_note("Eggs 4 2023-07-15").unwrap();

        assert_eq!(ledger.find("egg"), vec!["Eggs".to_string()]);
        assert_eq!(ledger.amount("egg"), Decimal::from(4));
        assert_eq!(
            ledger.expire_as_of(date(2023, 7, 16), 0),
            vec![("Eggs".to_string(), Decimal::from(4))]
        );
        assert!(ledger.expire_as_of(date(2023, 7, 14), 0).is_empty());
    }

    #[test]
    fn test_expire_boundary_is_inclusive() {
        let mut ledger = Ledger::new();
        ledger.add("Yogurt", Decimal::from(2), Some("2023-07-20")).unwrap();

        assert!(ledger.expire_as_of(date(2023, 7, 15), 4).is_empty());
        assert_eq!(
            ledger.expire_as_of(date(2023, 7, 15), 5),
            vec![("Yogurt".to_string(), Decimal::from(2))]
        );
    }

    #[test]
    fn test_expire_ignores_undated_batches() {
        let mut ledger = Ledger::new();
        ledger.add_by_note("Milk 2").unwrap();
        ledger.add("Bread", Decimal::ONE, Some("2023-07-10")).unwrap();
        ledger.add("Bread", Decimal::from(5), None).unwrap();

        let clock = FixedClock::from_ymd(2023, 7, 16).unwrap();
        assert_eq!(
            ledger.expire_with(&clock, 9999),
            vec![("Bread".to_string(), Decimal::ONE)]
        );
    }

    #[test]
    fn test_expire_skips_non_positive_sums() {
        let mut ledger = Ledger::new();
        ledger.add("Cheese", Decimal::from(1), Some("2023-07-01")).unwrap();
        ledger.add("Cheese", Decimal::from(-1), Some("2023-07-02")).unwrap();
        ledger.add("Ham", Decimal::from(-3), Some("2023-07-02")).unwrap();

        assert!(ledger.expire_as_of(date(2023, 7, 16), 0).is_empty());
    }

    #[test]
    fn test_expire_only_counts_batches_within_horizon() {
        let mut ledger = Ledger::new();
        ledger.add("Eggs", Decimal::from(4), Some("2023-07-15")).unwrap();
        ledger.add("Eggs", Decimal::from(6), Some("2023-07-25")).unwrap();

        assert_eq!(
            ledger.expire_as_of(date(2023, 7, 16), 0),
            vec![("Eggs".to_string(), Decimal::from(4))]
        );
        assert_eq!(
            ledger.expire_as_of(date(2023, 7, 16), 10),
            vec![("Eggs".to_string(), Decimal::from(10))]
        );
    }

    #[test]
    fn test_from_entries_merges_and_drops_empty() {
        let entries = vec![
            Entry {
                title: "Eggs".to_string(),
                batches: vec![Batch::without_expiry(Decimal::ONE)],
            },
            Entry {
                title: "Milk".to_string(),
                batches: Vec::new(),
            },
            Entry {
                title: "Eggs".to_string(),
                batches: vec![Batch::without_expiry(Decimal::from(2))],
            },
        ];

        let ledger = Ledger::from(entries);
        assert_eq!(ledger.titles().collect::<Vec<_>>(), vec!["Eggs"]);
        assert_eq!(ledger.batches("Eggs").unwrap().len(), 2);
        assert!(!ledger.contains_title("Milk"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_rebuilds_index() {
        let mut ledger = Ledger::new();
        ledger.add_by_note("Eggs 4 2023-07-15").unwrap();
        ledger.add_by_note("Milk 2").unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let restored: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);
        assert!(restored.contains_title("Milk"));
    }
}
