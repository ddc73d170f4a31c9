// src/error.rs
use navindex_parser::ParseError;
use navindex_types::EntryPath;
use std::fmt;
use thiserror::Error;

/// What is wrong with a malformed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// The symbol name is the empty string.
    EmptyName,
    /// The anchor slot holds an empty string rather than `null`.
    EmptyAnchor,
    /// Neither an anchor nor any children.
    MissingTarget,
    /// The children slot names an empty script.
    EmptyScript,
    /// Inline children and a children script were both given.
    ConflictingChildren,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Defect::EmptyName => "entry name is empty",
            Defect::EmptyAnchor => "anchor is an empty string",
            Defect::MissingTarget => "entry has neither an anchor nor children",
            Defect::EmptyScript => "children script name is empty",
            Defect::ConflictingChildren => "entry has both inline children and a children script",
        };
        f.write_str(text)
    }
}

/// The error type for loading and serializing navigation indexes.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Malformed index entry '{}' at {path}: {defect}", .name.as_deref().unwrap_or(""))]
    Malformed {
        path: EntryPath,
        name: Option<String>,
        defect: Defect,
    },

    #[error("Script parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine the index format: {0}")]
    UnknownFormat(String),
}

impl IndexError {
    pub(crate) fn malformed(path: &[usize], name: &str, defect: Defect) -> Self {
        IndexError::Malformed {
            path: EntryPath::from(path),
            name: (!name.is_empty()).then(|| name.to_string()),
            defect,
        }
    }

    /// Path of the offending entry for validation failures.
    pub fn entry_path(&self) -> Option<&EntryPath> {
        match self {
            IndexError::Malformed { path, .. } => Some(path),
            _ => None,
        }
    }
}
