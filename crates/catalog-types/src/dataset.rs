//! Catalog dataset identifiers.
//!
//! Each dataset is backed by exactly one `data_<name>.csv` input file.

use std::fmt;
use std::str::FromStr;

/// One named category of catalog data.
///
/// # Examples
///
/// ```
/// use catalog_types::Dataset;
///
/// assert_eq!(Dataset::Cars.name(), "cars");
/// assert_eq!(Dataset::Cars.file_name(), "data_cars.csv");
/// assert_eq!(Dataset::Cars.key_columns(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dataset {
    /// Display names for each car type letter.
    CarNames,
    /// Train sets (fleets).
    Sets,
    /// Per set/type car details, keyed by `<set>/<type>`.
    Cars,
    /// Extra notes referenced from ranges.
    Extras,
    /// Car number ranges grouped by type letter.
    Ranges,
}

impl Dataset {
    /// All datasets in catalog output order.
    pub const ALL: [Dataset; 5] = [
        Dataset::CarNames,
        Dataset::Sets,
        Dataset::Cars,
        Dataset::Extras,
        Dataset::Ranges,
    ];

    /// Datasets loaded as keyed records (everything except `ranges`).
    pub const SIMPLE: [Dataset; 4] = [
        Dataset::CarNames,
        Dataset::Sets,
        Dataset::Cars,
        Dataset::Extras,
    ];

    /// Returns the dataset name used as the top-level JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::CarNames => "carnames",
            Dataset::Sets => "sets",
            Dataset::Cars => "cars",
            Dataset::Extras => "extras",
            Dataset::Ranges => "ranges",
        }
    }

    /// Returns the source file name, `data_<name>.csv`.
    pub fn file_name(self) -> String {
        format!("data_{}.csv", self.name())
    }

    /// Number of leading columns that form the record key.
    ///
    /// `cars` is keyed by its first two columns joined with `/`.
    pub fn key_columns(self) -> usize {
        match self {
            Dataset::Cars => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown dataset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDataset(pub String);

impl fmt::Display for UnknownDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dataset: {}", self.0)
    }
}

impl std::error::Error for UnknownDataset {}

impl FromStr for Dataset {
    type Err = UnknownDataset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDataset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<String> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        assert_eq!(
            names,
            vec![
                "data_carnames.csv",
                "data_sets.csv",
                "data_cars.csv",
                "data_extras.csv",
                "data_ranges.csv",
            ]
        );
    }

    #[test]
    fn test_key_columns() {
        assert_eq!(Dataset::Cars.key_columns(), 2);
        assert_eq!(Dataset::Sets.key_columns(), 1);
        assert_eq!(Dataset::CarNames.key_columns(), 1);
        assert_eq!(Dataset::Extras.key_columns(), 1);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("extras".parse::<Dataset>().unwrap(), Dataset::Extras);
        assert_eq!("carnames".parse::<Dataset>().unwrap(), Dataset::CarNames);
        assert!("trains".parse::<Dataset>().is_err());
    }

    #[test]
    fn test_simple_excludes_ranges() {
        assert!(!Dataset::SIMPLE.contains(&Dataset::Ranges));
        assert_eq!(Dataset::SIMPLE.len(), 4);
    }
}
