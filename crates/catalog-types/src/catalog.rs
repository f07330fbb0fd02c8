//! The consolidated catalog.

use crate::{Dataset, RangeMap, RecordMap};

/// The full catalog combining every dataset.
///
/// Serializes as a single object whose keys appear in the fixed order
/// `carnames`, `sets`, `cars`, `extras`, `ranges`.
///
/// # Examples
///
/// ```
/// use catalog_types::{Catalog, Dataset, Record, RecordMap};
///
/// let mut sets = RecordMap::new();
/// let mut record = Record::new();
/// record.insert("name".to_string(), "Alpha".to_string());
/// sets.insert("S1".to_string(), record);
///
/// let mut catalog = Catalog::new();
/// catalog.set_records(Dataset::Sets, sets);
///
/// assert_eq!(catalog.records(Dataset::Sets).unwrap().len(), 1);
/// assert!(catalog.records(Dataset::Ranges).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    /// Car type names keyed by type letter.
    pub carnames: RecordMap,
    /// Sets keyed by set identifier.
    pub sets: RecordMap,
    /// Car details keyed by `<set>/<type>`.
    pub cars: RecordMap,
    /// Extra notes keyed by extra identifier.
    pub extras: RecordMap,
    /// Range entries grouped by type letter.
    pub ranges: RangeMap,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the keyed records of a simple dataset.
    ///
    /// Returns `None` for [`Dataset::Ranges`], which is not record-keyed.
    pub fn records(&self, dataset: Dataset) -> Option<&RecordMap> {
        match dataset {
            Dataset::CarNames => Some(&self.carnames),
            Dataset::Sets => Some(&self.sets),
            Dataset::Cars => Some(&self.cars),
            Dataset::Extras => Some(&self.extras),
            Dataset::Ranges => None,
        }
    }

    /// Replaces the records of a simple dataset.
    ///
    /// Passing [`Dataset::Ranges`] is a no-op; use [`Catalog::set_ranges`].
    pub fn set_records(&mut self, dataset: Dataset, records: RecordMap) {
        match dataset {
            Dataset::CarNames => self.carnames = records,
            Dataset::Sets => self.sets = records,
            Dataset::Cars => self.cars = records,
            Dataset::Extras => self.extras = records,
            Dataset::Ranges => {}
        }
    }

    /// Replaces the range groups.
    pub fn set_ranges(&mut self, ranges: RangeMap) {
        self.ranges = ranges;
    }

    /// Number of entries in a dataset: records, or range entries summed
    /// across all type letters.
    pub fn len_of(&self, dataset: Dataset) -> usize {
        match self.records(dataset) {
            Some(records) => records.len(),
            None => self.ranges.values().map(Vec::len).sum(),
        }
    }

    /// Returns true if no dataset holds any entry.
    pub fn is_empty(&self) -> bool {
        Dataset::ALL.iter().all(|d| self.len_of(*d) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Record, RangeEntry};

    fn entry(letter: &str, start: i64) -> RangeEntry {
        RangeEntry {
            set: "A".to_string(),
            start,
            end: start + 10,
            extra: String::new(),
            letter: letter.to_string(),
        }
    }

    #[test]
    fn test_len_of_counts_range_entries() {
        let mut ranges = RangeMap::new();
        ranges.insert("D".to_string(), vec![entry("D", 1000), entry("D", 2000)]);
        ranges.insert("N".to_string(), vec![entry("N", 5000)]);

        let mut catalog = Catalog::new();
        catalog.set_ranges(ranges);

        assert_eq!(catalog.len_of(Dataset::Ranges), 3);
        assert_eq!(catalog.len_of(Dataset::Cars), 0);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_set_records_ignores_ranges() {
        let mut records = RecordMap::new();
        records.insert("x".to_string(), Record::new());

        let mut catalog = Catalog::new();
        catalog.set_records(Dataset::Ranges, records);
        assert!(catalog.is_empty());
    }
}
