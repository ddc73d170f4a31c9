//! The loaded, immutable navigation index and the operations on it.
use crate::convert;
use crate::error::IndexError;
use crate::loader::{IndexLoader, SerializeOptions};
use navindex_parser::{RawScript, WriteOptions, write_script};
use navindex_types::{EntryPath, IndexEntry};
use std::iter::Enumerate;
use std::slice;

/// A symbol index table: the ordered entries of one navigation script.
///
/// Built once by [`IndexLoader`] (or [`NavIndex::new`]) and never mutated, so
/// it can be shared between readers freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavIndex {
    var_name: Option<String>,
    entries: Vec<IndexEntry>,
}

impl NavIndex {
    pub fn new(var_name: Option<String>, entries: Vec<IndexEntry>) -> Self {
        Self { var_name, entries }
    }

    /// Loads an index from source text with the default loader settings.
    pub fn parse(source: &str) -> Result<Self, IndexError> {
        IndexLoader::new().load_str(source)
    }

    /// The script variable the index was declared as, e.g. `i2c_8h`.
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    /// Top-level entries in document order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<IndexEntry> {
        self.entries
    }

    /// Pre-order traversal over every entry at every level.
    pub fn iter(&self) -> Walk<'_> {
        walk(&self.entries)
    }

    /// Number of entries across all levels.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a path produced by [`NavIndex::iter`] or [`NavIndex::lookup_path`].
    pub fn get(&self, path: &EntryPath) -> Option<&IndexEntry> {
        let (first, rest) = path.indices().split_first()?;
        let mut entry = self.entries.get(*first)?;
        for index in rest {
            entry = entry.children().get(*index)?;
        }
        Some(entry)
    }

    /// First entry named `name` in document order, searching nested entries too.
    pub fn lookup(&self, name: &str) -> Option<&IndexEntry> {
        lookup(&self.entries, name)
    }

    pub fn lookup_path(&self, name: &str) -> Option<(EntryPath, &IndexEntry)> {
        self.iter().find(|(_, entry)| entry.name() == name)
    }

    /// First entry whose anchor path is exactly `anchor`.
    pub fn lookup_anchor(&self, anchor: &str) -> Option<(EntryPath, &IndexEntry)> {
        self.iter()
            .find(|(_, entry)| entry.anchor().is_some_and(|a| a.as_str() == anchor))
    }

    /// Writes the index as a navigation script in the generator's layout.
    pub fn to_script(&self) -> String {
        self.write_script_with(self.var_name.clone(), &WriteOptions::default())
    }

    pub fn to_string_with(&self, options: &SerializeOptions) -> Result<String, IndexError> {
        options.write(self)
    }

    pub(crate) fn write_script_with(&self, var_name: Option<String>, options: &WriteOptions) -> String {
        let script = RawScript {
            var_name,
            entries: convert::to_raw(&self.entries),
        };
        write_script(&script, options)
    }
}

/// Pre-order iterator over a nested entry list, yielding each entry's path.
pub struct Walk<'a> {
    stack: Vec<Enumerate<slice::Iter<'a, IndexEntry>>>,
    path: Vec<usize>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (EntryPath, &'a IndexEntry);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;
            match frame.next() {
                Some((i, entry)) => {
                    self.path.truncate(depth - 1);
                    self.path.push(i);
                    let path = EntryPath::from(self.path.clone());
                    let children = entry.children();
                    if !children.is_empty() {
                        self.stack.push(children.iter().enumerate());
                    }
                    return Some((path, entry));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

pub fn walk(entries: &[IndexEntry]) -> Walk<'_> {
    Walk {
        stack: vec![entries.iter().enumerate()],
        path: Vec::new(),
    }
}

/// Parses a navigation script (or JSON index) into its ordered entries.
///
/// Fails with [`IndexError::Malformed`] when an entry has an empty name or
/// neither an anchor nor children.
pub fn load(source: &str) -> Result<Vec<IndexEntry>, IndexError> {
    NavIndex::parse(source).map(NavIndex::into_entries)
}

/// Writes entries back out as a bare navigation-script array.
///
/// `load(&serialize(&entries))` returns `entries` for any list produced by `load`.
pub fn serialize(entries: &[IndexEntry]) -> String {
    let script = RawScript {
        var_name: None,
        entries: convert::to_raw(entries),
    };
    write_script(&script, &WriteOptions::default())
}

/// Depth-first search for the first entry named `name`. `None` means not found.
pub fn lookup<'a>(entries: &'a [IndexEntry], name: &str) -> Option<&'a IndexEntry> {
    walk(entries).map(|(_, entry)| entry).find(|entry| entry.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navindex_types::Anchor;

    fn sample() -> NavIndex {
        NavIndex::new(
            Some("demo".to_string()),
            vec![
                IndexEntry::leaf("A", "a.html#1"),
                IndexEntry::group(
                    "G",
                    Some(Anchor::from("g.html")),
                    vec![
                        IndexEntry::leaf("G1", "g.html#1"),
                        IndexEntry::group("Inner", None, vec![IndexEntry::leaf("Deep", "d.html")]),
                    ],
                ),
                IndexEntry::leaf("Z", "z.html"),
            ],
        )
    }

    #[test]
    fn test_walk_is_preorder_with_paths() {
        let index = sample();
        let visited: Vec<(String, String)> = index
            .iter()
            .map(|(path, entry)| (path.to_string(), entry.name().to_string()))
            .collect();
        let expected = [
            ("0", "A"),
            ("1", "G"),
            ("1.0", "G1"),
            ("1.1", "Inner"),
            ("1.1.0", "Deep"),
            ("2", "Z"),
        ];
        assert_eq!(visited.len(), expected.len());
        for ((path, name), (exp_path, exp_name)) in visited.iter().zip(expected) {
            assert_eq!(path, exp_path);
            assert_eq!(name, exp_name);
        }
        assert_eq!(index.len(), 6);
    }

    #[test]
    fn test_get_by_path() {
        let index = sample();
        let entry = index.get(&EntryPath::from(vec![1, 1, 0])).unwrap();
        assert_eq!(entry.name(), "Deep");
        assert!(index.get(&EntryPath::from(vec![0, 0])).is_none());
        assert!(index.get(&EntryPath::root()).is_none());
    }

    #[test]
    fn test_lookup_first_match_in_document_order() {
        let entries = vec![
            IndexEntry::group("Outer", None, vec![IndexEntry::leaf("Dup", "first.html")]),
            IndexEntry::leaf("Dup", "second.html"),
        ];
        let found = lookup(&entries, "Dup").unwrap();
        assert_eq!(found.anchor().unwrap().as_str(), "first.html");
        assert!(lookup(&entries, "Missing").is_none());
    }

    #[test]
    fn test_lookup_anchor() {
        let index = sample();
        let (path, entry) = index.lookup_anchor("g.html#1").unwrap();
        assert_eq!(path.to_string(), "1.0");
        assert_eq!(entry.name(), "G1");
        assert!(index.lookup_anchor("nowhere.html").is_none());
    }

    #[test]
    fn test_hand_built_empty_group_is_rejected_on_reload() {
        let entries = vec![IndexEntry::group("G", None, vec![])];
        let err = load(&serialize(&entries)).unwrap_err();
        assert!(matches!(
            err,
            IndexError::Malformed { defect: crate::error::Defect::MissingTarget, .. }
        ));
        assert_eq!(err.entry_path(), Some(&EntryPath::from(vec![0])));
    }

    #[test]
    fn test_empty_walk() {
        let index = NavIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
        assert!(index.lookup("A").is_none());
    }
}
