//! Conversion between the parser's raw tree and validated index entries.
use crate::error::{Defect, IndexError};
use log::trace;
use navindex_parser::{RawChildren, RawEntry};
use navindex_types::{Anchor, IndexEntry};

/// Validates a raw tree, preserving entry order.
///
/// Fails on the first malformed entry in document order.
pub(crate) fn from_raw(raw: Vec<RawEntry>) -> Result<Vec<IndexEntry>, IndexError> {
    let mut path = Vec::new();
    validate_level(raw, &mut path)
}

fn validate_level(raw: Vec<RawEntry>, path: &mut Vec<usize>) -> Result<Vec<IndexEntry>, IndexError> {
    let mut entries = Vec::with_capacity(raw.len());
    for (i, entry) in raw.into_iter().enumerate() {
        path.push(i);
        entries.push(validate_entry(entry, path)?);
        path.pop();
    }
    Ok(entries)
}

fn validate_entry(raw: RawEntry, path: &mut Vec<usize>) -> Result<IndexEntry, IndexError> {
    let RawEntry { name, anchor, children } = raw;
    if name.is_empty() {
        return Err(IndexError::malformed(path, &name, Defect::EmptyName));
    }
    let anchor = match anchor {
        Some(a) if a.is_empty() => return Err(IndexError::malformed(path, &name, Defect::EmptyAnchor)),
        Some(a) => Some(Anchor::from(a)),
        None => None,
    };
    trace!("Validating entry '{}' at depth {}", name, path.len());

    match children {
        RawChildren::List(children) if !children.is_empty() => {
            let children = validate_level(children, path)?;
            Ok(IndexEntry::Group { name, anchor, children })
        }
        RawChildren::Script(script) if script.is_empty() => {
            Err(IndexError::malformed(path, &name, Defect::EmptyScript))
        }
        RawChildren::Script(script) => Ok(IndexEntry::Deferred { name, anchor, script }),
        // An empty list carries no more information than `null`.
        RawChildren::List(_) | RawChildren::None => match anchor {
            Some(anchor) => Ok(IndexEntry::Leaf { name, anchor }),
            None => Err(IndexError::malformed(path, &name, Defect::MissingTarget)),
        },
    }
}

pub(crate) fn to_raw(entries: &[IndexEntry]) -> Vec<RawEntry> {
    entries.iter().map(entry_to_raw).collect()
}

fn entry_to_raw(entry: &IndexEntry) -> RawEntry {
    let children = match entry {
        IndexEntry::Leaf { .. } => RawChildren::None,
        IndexEntry::Group { children, .. } => RawChildren::List(to_raw(children)),
        IndexEntry::Deferred { script, .. } => RawChildren::Script(script.clone()),
    };
    RawEntry::new(
        entry.name(),
        entry.anchor().map(|a| a.as_str().to_string()),
        children,
    )
}
