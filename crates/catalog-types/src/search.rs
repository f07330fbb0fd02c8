//! Car number lookup against a loaded catalog.
//!
//! A car number is an optional type prefix of up to three uppercase letters
//! followed by exactly four digits, e.g. `D1023` or `1023`.

use std::fmt;

use crate::{car_key, Catalog, RangeEntry, Record};

/// Maximum length of the type letter prefix.
const MAX_LETTER_LEN: usize = 3;
/// Exact number of digits in a car number.
const NUMBER_DIGITS: usize = 4;

/// Extras key whose `info` is a template for every `VS<n>` extra.
const VS_EXTRA: &str = "VS";
/// Placeholder substituted in the `VS` template.
const VS_PLACEHOLDER: &str = "$1";

/// A parsed car number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarNumber {
    /// Type letter prefix; empty when the number was given without one.
    pub letter: String,
    /// Numeric part.
    pub number: i64,
}

impl CarNumber {
    /// Parses a car number, returning `None` if it is not well formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_types::CarNumber;
    ///
    /// let id = CarNumber::parse("D1023").unwrap();
    /// assert_eq!(id.letter, "D");
    /// assert_eq!(id.number, 1023);
    ///
    /// assert!(CarNumber::parse("d1023").is_none());
    /// assert!(CarNumber::parse("D102").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let split = input
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(input.len());
        let (letter, digits) = input.split_at(split);

        if letter.len() > MAX_LETTER_LEN
            || digits.len() != NUMBER_DIGITS
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        Some(Self {
            letter: letter.to_string(),
            number: digits.parse().ok()?,
        })
    }
}

impl fmt::Display for CarNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.letter, self.number)
    }
}

/// The outcome of looking up a car number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// The range containing the number under the requested type letter.
    pub exact: Option<&'a RangeEntry>,
    /// When the type letter is unknown: the first containing range of every
    /// type letter, in catalog order.
    pub fuzzy: Vec<&'a RangeEntry>,
    /// Car details for the exact match's set and type.
    pub car: Option<&'a Record>,
    /// Every range of the exact match's type letter that shares its set.
    pub similar_ranges: Vec<&'a RangeEntry>,
    /// Resolved extra note for the exact match, or empty.
    pub extra_info: String,
}

impl Catalog {
    /// Looks up a car number.
    ///
    /// Returns `None` when neither an exact nor a fuzzy match exists.
    pub fn search(&self, id: &CarNumber) -> Option<SearchResult<'_>> {
        let mut result = SearchResult {
            exact: None,
            fuzzy: Vec::new(),
            car: None,
            similar_ranges: Vec::new(),
            extra_info: String::new(),
        };

        match self.ranges.get(&id.letter) {
            Some(ranges) => {
                result.exact = ranges.iter().find(|r| r.contains(id.number));
            }
            None => {
                result.fuzzy = self
                    .ranges
                    .values()
                    .filter_map(|ranges| ranges.iter().find(|r| r.contains(id.number)))
                    .collect();
            }
        }

        let Some(exact) = result.exact else {
            return if result.fuzzy.is_empty() {
                None
            } else {
                Some(result)
            };
        };

        result.car = self.cars.get(&car_key(&exact.set, &id.letter));
        result.similar_ranges = self
            .ranges
            .get(&id.letter)
            .map(|ranges| ranges.iter().filter(|r| r.set == exact.set).collect())
            .unwrap_or_default();
        result.extra_info = self.extra_info(exact);

        Some(result)
    }

    /// Resolves the extra note referenced by a range.
    fn extra_info(&self, range: &RangeEntry) -> String {
        if !range.has_extra() {
            return String::new();
        }

        if let Some(info) = self.extras.get(&range.extra).and_then(|e| e.get("info")) {
            return info.clone();
        }

        if let Some(suffix) = range.extra.strip_prefix(VS_EXTRA) {
            if let Some(template) = self.extras.get(VS_EXTRA).and_then(|e| e.get("info")) {
                return template.replacen(VS_PLACEHOLDER, suffix, 1);
            }
        }

        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeMap, RecordMap};

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn range(letter: &str, set: &str, start: i64, end: i64, extra: &str) -> RangeEntry {
        RangeEntry {
            set: set.to_string(),
            start,
            end,
            extra: extra.to_string(),
            letter: letter.to_string(),
        }
    }

    fn sample_catalog() -> Catalog {
        let mut ranges = RangeMap::new();
        ranges.insert(
            "D".to_string(),
            vec![
                range("D", "A", 6001, 6010, ""),
                range("D", "B", 6011, 6020, "VS12"),
                range("D", "A", 6021, 6030, "note"),
            ],
        );
        ranges.insert("N".to_string(), vec![range("N", "A", 5001, 5100, "")]);
        ranges.insert("T".to_string(), vec![range("T", "C", 6005, 6050, "")]);

        let mut cars = RecordMap::new();
        cars.insert("A/D".to_string(), record(&[("href", "a-set"), ("img", "a.jpg")]));

        let mut extras = RecordMap::new();
        extras.insert("note".to_string(), record(&[("info", "Refurbished")]));
        extras.insert("VS".to_string(), record(&[("info", "Part of set V$1")]));

        Catalog {
            cars,
            extras,
            ranges,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_car_number() {
        assert_eq!(
            CarNumber::parse("ABC1234"),
            Some(CarNumber {
                letter: "ABC".to_string(),
                number: 1234
            })
        );
        assert_eq!(CarNumber::parse("0042").unwrap().letter, "");
        assert_eq!(CarNumber::parse("0042").unwrap().number, 42);
        assert!(CarNumber::parse("ABCD1234").is_none());
        assert!(CarNumber::parse("D12345").is_none());
        assert!(CarNumber::parse("D12a4").is_none());
        assert!(CarNumber::parse("").is_none());
        assert!(CarNumber::parse(" D1234").is_none());
    }

    #[test]
    fn test_display_pads_number() {
        assert_eq!(CarNumber::parse("N0042").unwrap().to_string(), "N0042");
    }

    #[test]
    fn test_exact_match() {
        let catalog = sample_catalog();
        let id = CarNumber::parse("D6005").unwrap();
        let result = catalog.search(&id).unwrap();

        let exact = result.exact.unwrap();
        assert_eq!(exact.start, 6001);
        assert!(result.fuzzy.is_empty());
        assert_eq!(result.car.unwrap().get("img").unwrap(), "a.jpg");
        let labels: Vec<String> = result.similar_ranges.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["D6001-6010", "D6021-6030"]);
        assert_eq!(result.extra_info, "");
    }

    #[test]
    fn test_extra_info_direct_and_template() {
        let catalog = sample_catalog();

        let result = catalog.search(&CarNumber::parse("D6025").unwrap()).unwrap();
        assert_eq!(result.extra_info, "Refurbished");

        let result = catalog.search(&CarNumber::parse("D6015").unwrap()).unwrap();
        assert_eq!(result.extra_info, "Part of set V12");
        assert!(result.car.is_none());
    }

    #[test]
    fn test_known_letter_without_match_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.search(&CarNumber::parse("D9999").unwrap()).is_none());
    }

    #[test]
    fn test_fuzzy_match_across_letters() {
        let catalog = sample_catalog();
        let result = catalog.search(&CarNumber::parse("6008").unwrap()).unwrap();

        assert!(result.exact.is_none());
        let letters: Vec<&str> = result.fuzzy.iter().map(|r| r.letter.as_str()).collect();
        assert_eq!(letters, vec!["D", "T"]);
        assert!(result.similar_ranges.is_empty());
    }

    #[test]
    fn test_unknown_letter_without_match_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.search(&CarNumber::parse("Q0001").unwrap()).is_none());
    }
}
