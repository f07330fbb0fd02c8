//! Car number range entries.

use indexmap::IndexMap;

/// One interval of car numbers belonging to a set, scoped to a type letter.
///
/// Field order matches the serialized layout:
/// `{"set", "start", "end", "extra", "letter"}`.
///
/// # Examples
///
/// ```
/// use catalog_types::RangeEntry;
///
/// let range = RangeEntry {
///     set: "S1".to_string(),
///     start: 10,
///     end: 20,
///     extra: String::new(),
///     letter: "A".to_string(),
/// };
///
/// assert!(range.contains(10));
/// assert!(range.contains(20));
/// assert!(!range.contains(21));
/// assert_eq!(range.label(), "A10-20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeEntry {
    /// The set this range belongs to.
    pub set: String,
    /// First car number in the range (inclusive).
    pub start: i64,
    /// Last car number in the range (inclusive).
    pub end: i64,
    /// Key into the `extras` dataset, or empty.
    pub extra: String,
    /// The type letter this range is grouped under.
    pub letter: String,
}

impl RangeEntry {
    /// Returns true if `number` lies within `start..=end`.
    pub fn contains(&self, number: i64) -> bool {
        number >= self.start && number <= self.end
    }

    /// Returns true if this range references an extra note.
    pub fn has_extra(&self) -> bool {
        !self.extra.is_empty()
    }

    /// Human-readable label, e.g. `D1001-1050`.
    pub fn label(&self) -> String {
        format!("{}{}-{}", self.letter, self.start, self.end)
    }
}

/// Type letter to its range entries, in input order.
pub type RangeMap = IndexMap<String, Vec<RangeEntry>>;
