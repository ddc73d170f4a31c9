#![allow(dead_code)]

pub mod fixtures;

use navindex::{IndexEntry, IndexError, NavIndex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Loads the generator's I2C header index.
pub fn i2c_index() -> Result<NavIndex, IndexError> {
    NavIndex::parse(fixtures::I2C_SCRIPT)
}

/// Names of every entry in pre-order.
pub fn names(index: &NavIndex) -> Vec<String> {
    index.iter().map(|(_, entry)| entry.name().to_string()).collect()
}

/// Asserts that `entry` is a leaf pointing at `anchor`.
pub fn assert_leaf(entry: &IndexEntry, name: &str, anchor: &str) {
    match entry {
        IndexEntry::Leaf { name: n, anchor: a } => {
            assert_eq!(n, name);
            assert_eq!(a.as_str(), anchor);
        }
        other => panic!("expected leaf '{}', got {:?}", name, other),
    }
}
