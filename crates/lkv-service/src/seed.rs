use lkv_types::Record;

/// Records written by `init_ledger`, in key order:
/// `(serial number, name, origin, date, owner)`.
pub const SEED_DATA: [(&str, &str, &str, &str, &str); 5] = [
    ("1", "Grape", "South Africa", "2020/07/01", "Walmart"),
    ("2", "Banana", "Filipino", "2020/07/01", "Provigo"),
    ("3", "Apple", "China", "2020/07/01", "Walmart"),
    ("4", "Strawberry", "USA", "2020/07/01", "Walmart"),
    ("5", "Blueberry", "Canada", "2020/07/01", "Provigo"),
];

pub fn seed_records() -> Vec<Record> {
    SEED_DATA
        .iter()
        .map(|&(serial, name, origin, date, owner)| Record::new(serial, name, origin, date, owner))
        .collect()
}
