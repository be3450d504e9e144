//! The webography record format: flat bibliographic entries.
//!
//! A webography file is a sequence of four-line records, each line a fixed
//! tag followed by the rest of the line, in exactly this order:
//!
//! ```text
//! T: the title
//! L: the link
//! N: the name
//! D: the date
//! ```
//!
//! Records are separated by blank lines. Reordering, omitting, or adding a
//! field fails the whole parse; there are no partially populated entries.
//! This format is independent of Nama documents and has no rendering step.

use chumsky::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::nama::grammar::combinators::{padding, ParserError};

/// A parsed webography file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webography {
    pub entries: Vec<Entry>,
}

/// One bibliographic record. All four fields are required and captured
/// verbatim (without the line terminator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub name: String,
    pub date: String,
}

/// The rest of a line: one or more non-newline characters.
fn field_value() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| *c != '\n')
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// One tagged field line, newline-terminated. Leading whitespace before the
/// tag is tolerated.
fn field_line(tag: &'static str) -> impl Parser<char, String, Error = ParserError> + Clone {
    padding()
        .ignore_then(just(tag))
        .ignore_then(field_value())
        .then_ignore(just('\n'))
}

/// A full record in T, L, N, D order. The date line may end at end of
/// input instead of a newline.
fn entry() -> impl Parser<char, Entry, Error = ParserError> + Clone {
    field_line("T: ")
        .then(field_line("L: "))
        .then(field_line("N: "))
        .then(padding().ignore_then(just("D: ")).ignore_then(field_value()))
        .map(|(((title, link), name), date)| Entry {
            title,
            link,
            name,
            date,
        })
}

fn webography() -> impl Parser<char, Webography, Error = ParserError> + Clone {
    entry()
        .repeated()
        .then_ignore(padding())
        .then_ignore(end())
        .map(|entries| Webography { entries })
}

/// Parse a complete webography file. An empty (or all-whitespace) input is
/// a valid webography with zero entries.
pub fn parse_webography(input: &str) -> Result<Webography, ParseError> {
    webography()
        .parse(input)
        .map_err(|errors| ParseError::from_chumsky(input, errors))
}
