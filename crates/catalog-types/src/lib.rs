//! # catalog-types
//!
//! Type definitions for the train car catalog.
//!
//! The catalog combines five datasets: car type names, sets, per set/type car
//! details, extra notes, and car number ranges grouped by type letter. Record
//! datasets have no fixed schema; each record maps column headers to the raw
//! cell text of its source row.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!
//! ## Usage
//!
//! ```rust
//! use catalog_types::{Catalog, CarNumber, RangeEntry, RangeMap};
//!
//! let mut ranges = RangeMap::new();
//! ranges.insert(
//!     "D".to_string(),
//!     vec![RangeEntry {
//!         set: "A".to_string(),
//!         start: 6001,
//!         end: 6010,
//!         extra: String::new(),
//!         letter: "D".to_string(),
//!     }],
//! );
//!
//! let mut catalog = Catalog::new();
//! catalog.set_ranges(ranges);
//!
//! let id = CarNumber::parse("D6003").unwrap();
//! let found = catalog.search(&id).unwrap();
//! assert_eq!(found.exact.unwrap().set, "A");
//! ```

#![warn(missing_docs)]

mod catalog;
mod dataset;
mod range;
mod record;
pub mod search;

// Re-export all public types at crate root
pub use catalog::Catalog;
pub use dataset::{Dataset, UnknownDataset};
pub use range::{RangeEntry, RangeMap};
pub use record::{car_key, Record, RecordMap, CAR_KEY_SEPARATOR};
pub use search::{CarNumber, SearchResult};
