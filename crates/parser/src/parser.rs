//! A `nom`-based parser for navigation-tree scripts.
//!
//! Accepts the generator's `var name = [ ... ];` form as well as a bare
//! `[ ... ]` array. Entries are `[ name, anchor-or-null, children-or-null ]`
//! where the children slot may be omitted, hold a nested array, or hold the
//! name of another script.
use super::ast::{RawChildren, RawEntry, RawScript};
use crate::error::{ParseError, Position};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{is_not, tag, take_while, take_while_m_n},
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{cut, map, map_opt, opt, recognize, value},
    error::{Error as NomError, ErrorKind},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated},
};

/// Nesting limit used by [`parse_script`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Ceiling for any requested nesting limit. The parser recurses once per level.
pub const MAX_DEPTH_LIMIT: usize = 128;

const SNIPPET_LEN: usize = 24;

// --- Main Public Parser ---

pub fn parse_script(input: &str) -> Result<RawScript, ParseError> {
    parse_script_with_depth(input, DEFAULT_MAX_DEPTH)
}

/// Parses a script, rejecting entries nested more than `max_depth` levels
/// below the top-level list. `max_depth` is capped at [`MAX_DEPTH_LIMIT`].
pub fn parse_script_with_depth(input: &str, max_depth: usize) -> Result<RawScript, ParseError> {
    let max_depth = max_depth.min(MAX_DEPTH_LIMIT);
    match script(input, max_depth) {
        Ok(("", parsed)) => Ok(parsed),
        Ok((rem, _)) => Err(ParseError::TrailingInput {
            position: Position::locate(input, rem),
            found: snippet(rem),
        }),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = Position::locate(input, e.input);
            if e.code == ErrorKind::TooLarge {
                Err(ParseError::TooDeep { position, max_depth })
            } else if e.input.is_empty() {
                Err(ParseError::UnexpectedEnd)
            } else {
                Err(ParseError::Syntax {
                    position,
                    kind: format!("{:?}", e.code),
                    found: snippet(e.input),
                })
            }
        }
        Err(nom::Err::Incomplete(_)) => Err(ParseError::UnexpectedEnd),
    }
}

fn snippet(rest: &str) -> String {
    rest.chars().take(SNIPPET_LEN).collect()
}

// --- Combinators ---

fn script(input: &str, max_depth: usize) -> IResult<&str, RawScript> {
    let (input, _) = multispace0(input)?;
    let (input, var_name) = opt(declaration).parse(input)?;
    let (input, entries) = ws(|i| entry_list(i, 0, max_depth)).parse(input)?;
    let (input, _) = opt(char(';')).parse(input)?;
    let (input, _) = multispace0(input)?;

    Ok((
        input,
        RawScript {
            var_name: var_name.map(str::to_string),
            entries,
        },
    ))
}

fn declaration(input: &str) -> IResult<&str, &str> {
    delimited(
        terminated(tag("var"), multispace1),
        identifier,
        ws(char('=')),
    )
    .parse(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"), tag("$"))),
        take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '$'),
    ))
    .parse(input)
}

/// `[ entry, entry, ... ]` with an optional trailing comma.
fn entry_list(input: &str, depth: usize, max_depth: usize) -> IResult<&str, Vec<RawEntry>> {
    let (rest, _) = char('[').parse(input)?;
    if depth > max_depth {
        return Err(nom::Err::Failure(NomError::new(input, ErrorKind::TooLarge)));
    }
    let (rest, _) = multispace0(rest)?;
    let (rest, entries) = separated_list0(ws(char(',')), |i| entry(i, depth, max_depth)).parse(rest)?;
    let (rest, _) = opt(ws(char(','))).parse(rest)?;
    let (rest, _) = cut(preceded(multispace0, char(']'))).parse(rest)?;
    Ok((rest, entries))
}

fn entry(input: &str, depth: usize, max_depth: usize) -> IResult<&str, RawEntry> {
    let (input, _) = terminated(char('['), multispace0).parse(input)?;
    // Past the opening bracket this must be an entry, so errors are not backtracked.
    let (input, (name, anchor, slot)) = cut((
        string_literal,
        preceded(ws(char(',')), nullable_string),
        opt(preceded(ws(char(',')), |i| children(i, depth, max_depth))),
    ))
    .parse(input)?;
    let (input, _) = opt(ws(char(','))).parse(input)?;
    let (input, _) = cut(preceded(multispace0, char(']'))).parse(input)?;

    Ok((
        input,
        RawEntry {
            name,
            anchor,
            children: slot.unwrap_or_default(),
        },
    ))
}

fn children(input: &str, depth: usize, max_depth: usize) -> IResult<&str, RawChildren> {
    alt((
        map(|i| entry_list(i, depth + 1, max_depth), RawChildren::List),
        map(string_literal, RawChildren::Script),
        value(RawChildren::None, null),
    ))
    .parse(input)
}

// --- Literal Parsers ---

fn null(input: &str) -> IResult<&str, &str> {
    tag("null").parse(input)
}

fn nullable_string(input: &str) -> IResult<&str, Option<String>> {
    alt((map(string_literal, Some), value(None, null))).parse(input)
}

fn string_literal(input: &str) -> IResult<&str, String> {
    alt((quoted('"'), quoted('\''))).parse(input)
}

enum Fragment<'a> {
    Literal(&'a str),
    Escaped(char),
}

fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, String> {
    move |input: &str| {
        let stop = if quote == '"' { "\"\\" } else { "'\\" };
        delimited(
            char(quote),
            fold_many0(
                alt((map(is_not(stop), Fragment::Literal), map(escape, Fragment::Escaped))),
                String::new,
                |mut acc, fragment| {
                    match fragment {
                        Fragment::Literal(s) => acc.push_str(s),
                        Fragment::Escaped(c) => acc.push(c),
                    }
                    acc
                },
            ),
            char(quote),
        )
        .parse(input)
    }
}

fn escape(input: &str) -> IResult<&str, char> {
    preceded(
        char('\\'),
        alt((
            unicode_escape,
            value('\n', char('n')),
            value('\r', char('r')),
            value('\t', char('t')),
            value('\u{08}', char('b')),
            value('\u{0C}', char('f')),
            value('\\', char('\\')),
            value('/', char('/')),
            value('"', char('"')),
            value('\'', char('\'')),
        )),
    )
    .parse(input)
}

/// `\uXXXX`. Surrogate halves are rejected.
fn unicode_escape(input: &str) -> IResult<&str, char> {
    map_opt(
        preceded(char('u'), take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit())),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}
