// src/loader/builder.rs
use super::config::Format;
use crate::convert;
use crate::error::IndexError;
use crate::index::NavIndex;
use crate::json;
use log::debug;
use navindex_parser::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, parse_script_with_depth};
use std::fs;
use std::io;
use std::path::Path;

/// Loads [`NavIndex`] values from text or files.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    format: Option<Format>,
    max_depth: usize,
}

impl Default for IndexLoader {
    fn default() -> Self {
        Self {
            format: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl IndexLoader {
    /// Creates a loader that detects the format from the input.
    pub fn new() -> Self {
        Default::default()
    }

    /// Forces a format instead of detecting it.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Limits how deeply script entries may nest below the top-level list,
    /// capped at [`MAX_DEPTH_LIMIT`]. JSON input is bounded by `serde_json`'s
    /// own recursion limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    pub fn load_str(&self, source: &str) -> Result<NavIndex, IndexError> {
        let format = match self.format {
            Some(format) => format,
            None => Format::detect(source).ok_or_else(|| {
                IndexError::UnknownFormat(source.trim_start().chars().take(16).collect())
            })?,
        };
        self.load_as(source, format)
    }

    /// Reads and loads an index file. A `.js` extension selects the script
    /// format unless one was forced; otherwise the content decides.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<NavIndex, IndexError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            IndexError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read index from '{}': {}", path_ref.display(), e),
            ))
        })?;
        match self.format.or_else(|| Format::from_path(path_ref)) {
            Some(format) => self.load_as(&source, format),
            None => self.load_str(&source),
        }
    }

    fn load_as(&self, source: &str, format: Format) -> Result<NavIndex, IndexError> {
        let index = match format {
            Format::Script => {
                let script = parse_script_with_depth(source, self.max_depth)?;
                NavIndex::new(script.var_name, convert::from_raw(script.entries)?)
            }
            Format::Json => json::from_json(source)?,
        };
        debug!(
            "Loaded {} index '{}' with {} top-level entries ({} total)",
            format,
            index.var_name().unwrap_or("<anonymous>"),
            index.entries().len(),
            index.len()
        );
        Ok(index)
    }
}
