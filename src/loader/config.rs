// src/loader/config.rs
use crate::error::IndexError;
use crate::index::NavIndex;
use crate::json;
use navindex_parser::WriteOptions;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The on-disk representation of an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// The generator's `var name = [ ... ];` navigation script. (Default)
    /// A bare `[ [ "name", "anchor", null ], ... ]` array is read the same way.
    #[default]
    Script,
    /// JSON objects: `{ "name": ..., "anchor": ..., "children": ... }`.
    Json,
}

impl Format {
    /// Infers the format from a file extension. `.json` is not conclusive
    /// because tuple arrays are valid JSON too, so only `.js` is mapped.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("js") => Some(Format::Script),
            _ => None,
        }
    }

    /// Infers the format from the first tokens of the source text.
    pub fn detect(source: &str) -> Option<Self> {
        let trimmed = source.trim_start();
        if trimmed.starts_with("var") {
            return Some(Format::Script);
        }
        let mut chars = trimmed.chars();
        match chars.next()? {
            '{' => Some(Format::Json),
            '[' => match chars.as_str().trim_start().chars().next() {
                Some('{') => Some(Format::Json),
                // An empty array parses the same either way.
                _ => Some(Format::Script),
            },
            _ => None,
        }
    }
}

impl FromStr for Format {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" | "js" => Ok(Format::Script),
            "json" => Ok(Format::Json),
            other => Err(IndexError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Script => write!(f, "script"),
            Format::Json => write!(f, "json"),
        }
    }
}

/// Settings for writing an index back out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeOptions {
    pub format: Format,
    /// Indentation of top-level script entries; nested levels add two more.
    /// For JSON, any non-zero value selects pretty printing.
    pub indent: usize,
    /// Overrides the index's own variable name when set.
    pub var_name: Option<String>,
    pub trailing_newline: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            format: Format::Script,
            indent: 4,
            var_name: None,
            trailing_newline: false,
        }
    }
}

impl SerializeOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_var_name(mut self, var_name: impl Into<String>) -> Self {
        self.var_name = Some(var_name.into());
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub(crate) fn write(&self, index: &NavIndex) -> Result<String, IndexError> {
        let var_name = self
            .var_name
            .clone()
            .or_else(|| index.var_name().map(str::to_string));
        let mut out = match self.format {
            Format::Script => {
                let options = WriteOptions {
                    indent: self.indent,
                    trailing_newline: false,
                    ..WriteOptions::default()
                };
                index.write_script_with(var_name, &options)
            }
            Format::Json => json::to_json(index, var_name, self.indent > 0)?,
        };
        if self.trailing_newline {
            out.push('\n');
        }
        Ok(out)
    }
}
