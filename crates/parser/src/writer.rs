//! Writes a [`RawScript`] back out in the generator's layout.
//!
//! ```text
//! var i2c_8h =
//! [
//!     [ "I2C_Init", "i2c_8h.html#a686a...", null ],
//!     [ "I2C_Mode_t", "i2c_8h.html#ae456...", [
//!       [ "I2C_STANDARD_MODE", "i2c_8h.html#ae456...a6d5...", null ]
//!     ] ]
//! ];
//! ```
use crate::ast::{RawChildren, RawEntry, RawScript};

/// Layout settings for [`write_script`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Indentation of top-level entries.
    pub indent: usize,
    /// Extra indentation for each nesting level below the top.
    pub nested_indent: usize,
    /// Whether to end the output with a newline after `];`.
    pub trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            nested_indent: 2,
            trailing_newline: false,
        }
    }
}

pub fn write_script(script: &RawScript, options: &WriteOptions) -> String {
    let mut out = String::new();
    if let Some(var_name) = &script.var_name {
        out.push_str("var ");
        out.push_str(var_name);
        out.push_str(" =\n");
    }
    out.push_str("[\n");
    write_entries(&mut out, &script.entries, options.indent, options);
    out.push(']');
    if script.var_name.is_some() {
        out.push(';');
    }
    if options.trailing_newline {
        out.push('\n');
    }
    out
}

fn write_entries(out: &mut String, entries: &[RawEntry], indent: usize, options: &WriteOptions) {
    for (i, entry) in entries.iter().enumerate() {
        write_entry(out, entry, indent, options);
        if i + 1 < entries.len() {
            out.push(',');
        }
        out.push('\n');
    }
}

fn write_entry(out: &mut String, entry: &RawEntry, indent: usize, options: &WriteOptions) {
    let pad = " ".repeat(indent);
    out.push_str(&pad);
    out.push_str("[ ");
    push_quoted(out, &entry.name);
    out.push_str(", ");
    match &entry.anchor {
        Some(anchor) => push_quoted(out, anchor),
        None => out.push_str("null"),
    }
    out.push_str(", ");
    match &entry.children {
        RawChildren::None => out.push_str("null ]"),
        RawChildren::Script(script) => {
            push_quoted(out, script);
            out.push_str(" ]");
        }
        RawChildren::List(children) => {
            out.push_str("[\n");
            write_entries(out, children, indent + options.nested_indent, options);
            out.push_str(&pad);
            out.push_str("] ]");
        }
    }
}

/// Pushes `value` as a double-quoted string, escaping what the parser unescapes.
fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_script;

    #[test]
    fn test_write_layout() {
        let script = RawScript {
            var_name: Some("demo".to_string()),
            entries: vec![
                RawEntry::new("A", Some("a.html#x".to_string()), RawChildren::None),
                RawEntry::new(
                    "G",
                    None,
                    RawChildren::List(vec![RawEntry::new("C", Some("c.html".to_string()), RawChildren::None)]),
                ),
            ],
        };
        let expected = "var demo =\n[\n    [ \"A\", \"a.html#x\", null ],\n    [ \"G\", null, [\n      [ \"C\", \"c.html\", null ]\n    ] ]\n];";
        assert_eq!(write_script(&script, &WriteOptions::default()), expected);
    }

    #[test]
    fn test_bare_array_and_empty() {
        let script = RawScript::default();
        assert_eq!(write_script(&script, &WriteOptions::default()), "[\n]");
        assert_eq!(parse_script("[\n]").unwrap(), script);
    }

    #[test]
    fn test_escapes_survive_reparse() {
        let script = RawScript {
            var_name: None,
            entries: vec![RawEntry::new(
                "operator\"\\\u{1}",
                Some("tab\there".to_string()),
                RawChildren::Script("more_dup".to_string()),
            )],
        };
        let written = write_script(&script, &WriteOptions::default());
        assert_eq!(parse_script(&written).unwrap(), script);
    }
}
