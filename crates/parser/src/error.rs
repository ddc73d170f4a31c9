use std::fmt;
use thiserror::Error;

/// A location in the script source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// Computes the position of `rest` inside `input`, where `rest` is a suffix of `input`.
    pub fn locate(input: &str, rest: &str) -> Self {
        let offset = input.len().saturating_sub(rest.len());
        let consumed = &input[..offset];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = consumed[line_start..].chars().count() + 1;
        Self { offset, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Syntax error at {position} ({kind}) near '{found}'")]
    Syntax {
        position: Position,
        kind: String,
        found: String,
    },

    #[error("Entries nested deeper than {max_depth} levels at {position}")]
    TooDeep { position: Position, max_depth: usize },

    #[error("Unexpected content after the index at {position}: '{found}'")]
    TrailingInput { position: Position, found: String },

    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

impl ParseError {
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Syntax { position, .. }
            | ParseError::TooDeep { position, .. }
            | ParseError::TrailingInput { position, .. } => Some(*position),
            ParseError::UnexpectedEnd => None,
        }
    }
}
