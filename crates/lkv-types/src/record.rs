use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator appended between owners when a record changes hands.
pub const OWNER_SEPARATOR: char = '-';

/// A ledger record with a fixed five-field shape.
///
/// The serialized field names (`SerialNum`, `Name`, `Origin`, `Date`,
/// `Owner`) are part of the wire format and must not change. `date` is
/// opaque text and is never parsed.
///
/// `owner` is an append-only history: [`Record::transfer_to`] extends it with
/// `-<new owner>` and nothing ever shortens or replaces it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "SerialNum")]
    pub serial_number: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Origin")]
    pub origin: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Owner")]
    pub owner: String,
}

impl Record {
    pub fn new(
        serial_number: impl Into<String>,
        name: impl Into<String>,
        origin: impl Into<String>,
        date: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            serial_number: serial_number.into(),
            name: name.into(),
            origin: origin.into(),
            date: date.into(),
            owner: owner.into(),
        }
    }

    /// Append `new_owner` to the ownership history.
    pub fn transfer_to(&mut self, new_owner: &str) {
        self.owner.push(OWNER_SEPARATOR);
        self.owner.push_str(new_owner);
    }

    /// The owners this record has had, oldest first.
    ///
    /// This splits the owner string on [`OWNER_SEPARATOR`], so an owner name
    /// that itself contains `-` shows up as several entries.
    pub fn owner_history(&self) -> Vec<&str> {
        self.owner.split(OWNER_SEPARATOR).collect()
    }

    /// The most recent owner.
    pub fn current_owner(&self) -> &str {
        self.owner
            .rsplit(OWNER_SEPARATOR)
            .next()
            .unwrap_or(self.owner.as_str())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} from {} ({}) owned by {}",
            self.serial_number, self.name, self.origin, self.date, self.owner
        )
    }
}

/// A `(key, record)` pair returned from lookups and range scans.
///
/// Serializes as `{"Key": ..., "Record": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: Record,
}

impl QueryResult {
    pub fn new(key: impl Into<String>, record: Record) -> Self {
        Self {
            key: key.into(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mango() -> Record {
        Record::new("9", "Mango", "Mexico", "2021/01/01", "CostCo")
    }

    #[test]
    fn transfer_appends_owner() {
        let mut record = mango();
        record.transfer_to("BJs");
        assert_eq!(record.owner, "CostCo-BJs");
        record.transfer_to("Loblaws");
        assert_eq!(record.owner, "CostCo-BJs-Loblaws");
    }

    #[test]
    fn transfer_leaves_other_fields_alone() {
        let mut record = mango();
        record.transfer_to("BJs");
        assert_eq!(record.serial_number, "9");
        assert_eq!(record.name, "Mango");
        assert_eq!(record.origin, "Mexico");
        assert_eq!(record.date, "2021/01/01");
    }

    #[test]
    fn owner_history_and_current_owner() {
        let mut record = mango();
        assert_eq!(record.owner_history(), vec!["CostCo"]);
        assert_eq!(record.current_owner(), "CostCo");

        record.transfer_to("BJs");
        record.transfer_to("Metro");
        assert_eq!(record.owner_history(), vec!["CostCo", "BJs", "Metro"]);
        assert_eq!(record.current_owner(), "Metro");
    }

    #[test]
    fn transfer_to_empty_owner_still_appends_separator() {
        let mut record = mango();
        record.transfer_to("");
        assert_eq!(record.owner, "CostCo-");
        assert_eq!(record.current_owner(), "");
    }

    #[test]
    fn query_result_json_shape() {
        let result = QueryResult::new("record10", mango());
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"Key":"record10","Record":{"SerialNum":"9","Name":"Mango","Origin":"Mexico","Date":"2021/01/01","Owner":"CostCo"}}"#
        );
    }

    #[test]
    fn display() {
        let text = mango().to_string();
        assert!(text.contains("Mango"));
        assert!(text.contains("CostCo"));
    }

    proptest! {
        #[test]
        fn transfers_never_shorten_owner(initial in "[A-Za-z]{1,8}", owners in proptest::collection::vec("[A-Za-z]{1,8}", 0..6)) {
            let mut record = Record::new("1", "Fig", "Turkey", "2020/07/01", initial.clone());
            let mut expected = initial;
            for owner in &owners {
                let before = record.owner.clone();
                record.transfer_to(owner);
                prop_assert!(record.owner.starts_with(&before));
                expected = format!("{expected}-{owner}");
            }
            prop_assert_eq!(&record.owner, &expected);
            prop_assert_eq!(record.owner_history().len(), owners.len() + 1);
        }
    }
}
