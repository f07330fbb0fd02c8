//! Keyed catalog records.
//!
//! Records carry no static schema: every non-key column of the source file
//! becomes a field, named by its header and holding the raw cell text.

use indexmap::IndexMap;

/// Field name to cell value for one record, in header order.
pub type Record = IndexMap<String, String>;

/// Record key to record, in input order.
pub type RecordMap = IndexMap<String, Record>;

/// Separator between the two key columns of a `cars` record.
pub const CAR_KEY_SEPARATOR: char = '/';

/// Builds the key of a `cars` record from its set and type columns.
///
/// # Examples
///
/// ```
/// assert_eq!(catalog_types::car_key("Toyota", "Corolla"), "Toyota/Corolla");
/// ```
pub fn car_key(set: &str, letter: &str) -> String {
    let mut key = String::with_capacity(set.len() + letter.len() + 1);
    key.push_str(set);
    key.push(CAR_KEY_SEPARATOR);
    key.push_str(letter);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_key() {
        assert_eq!(car_key("A", "B"), "A/B");
        assert_eq!(car_key("", "T"), "/T");
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut record = Record::new();
        record.insert("zeta".to_string(), "1".to_string());
        record.insert("alpha".to_string(), "2".to_string());
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }
}
