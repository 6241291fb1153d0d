//! A `nom`-based parser for textual paths like `customer.orders[0].id`.
use crate::error::AccessError;
use crate::path::PathSegment;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, char, u64 as nom_u64},
    combinator::{map, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

// --- Main Public Parser ---

/// Parses a dotted path expression into segments.
///
/// Keys are identifiers (`[A-Za-z_][A-Za-z0-9_]*`), indices are bracketed
/// unsigned integers, and a lone `.` selects the root (the empty path).
/// There is no query syntax: no wildcards, filters, or recursive descent.
pub fn parse_path(input: &str) -> Result<Vec<PathSegment>, AccessError> {
    let trimmed = input.trim();
    if trimmed == "." {
        return Ok(Vec::new());
    }
    match full_path(trimmed) {
        Ok(("", segments)) => Ok(segments),
        Ok((rem, _)) => Err(AccessError::PathParse(
            input.to_string(),
            format!("Parser did not consume all input. Remainder: '{}'", rem),
        )),
        Err(e) => Err(AccessError::PathParse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        take_while(|c: char| c.is_alphanumeric() || c == '_'),
    ))
    .parse(input)
}

fn key_segment(input: &str) -> IResult<&str, PathSegment> {
    map(preceded(char('.'), identifier), |s| {
        PathSegment::Key(s.to_string())
    })
    .parse(input)
}

fn index_segment(input: &str) -> IResult<&str, PathSegment> {
    map(delimited(char('['), nom_u64, char(']')), |i| {
        PathSegment::Index(i as usize)
    })
    .parse(input)
}

fn path_segment(input: &str) -> IResult<&str, PathSegment> {
    alt((key_segment, index_segment)).parse(input)
}

// The first segment is an undotted identifier, or an index so pure-array
// roots stay addressable.
fn leading_segment(input: &str) -> IResult<&str, PathSegment> {
    alt((
        map(identifier, |s| PathSegment::Key(s.to_string())),
        index_segment,
    ))
    .parse(input)
}

fn full_path(input: &str) -> IResult<&str, Vec<PathSegment>> {
    map(
        pair(leading_segment, many0(path_segment)),
        |(first, mut rest)| {
            let mut segments = vec![first];
            segments.append(&mut rest);
            segments
        },
    )
    .parse(input)
}
