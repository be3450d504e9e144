//! Parse error type shared by the Nama and Webography grammars.
//!
//! Both grammars backtrack freely, so the error a caller sees is derived
//! from the deepest position any alternative reached before failing. That
//! position is reported as both a byte offset and a line/column pair.

use std::fmt;

use chumsky::error::Simple;

/// A parse failure for a whole input. There are no partial results; the
/// parse either produces a tree or one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Byte offset of the deepest failure.
    pub offset: usize,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure.
    pub column: usize,
    /// Human-readable description of what was expected there.
    pub expected: String,
}

impl ParseError {
    /// Collapse the errors chumsky reports into a single `ParseError`,
    /// keeping the one that got furthest into the input.
    pub(crate) fn from_chumsky(input: &str, errors: Vec<Simple<char>>) -> Self {
        let deepest = errors.into_iter().max_by_key(|e| e.span().start);
        match deepest {
            Some(err) => {
                let offset = err.span().start;
                let (line, column) = offset_to_line_column(input, offset);
                let mut expectations: Vec<String> = err
                    .expected()
                    .map(|tok| match tok {
                        Some(c) => format!("'{}'", c),
                        None => "end of input".to_string(),
                    })
                    .collect();
                expectations.sort();
                expectations.dedup();
                let mut expected = if expectations.is_empty() {
                    "valid syntax".to_string()
                } else {
                    expectations.join(" or ")
                };
                if let Some(found) = err.found() {
                    expected.push_str(&format!(", found '{}'", found));
                }
                Self {
                    offset,
                    line,
                    column,
                    expected,
                }
            }
            None => Self {
                offset: 0,
                line: 1,
                column: 1,
                expected: "valid syntax".to_string(),
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parse error at line {}, column {} (offset {}): expected {}",
            self.line, self.column, self.offset, self.expected
        )
    }
}

impl std::error::Error for ParseError {}

/// Convert a byte offset into 1-based line/column coordinates.
fn offset_to_line_column(input: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in input.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_maps_to_line_and_column() {
        let input = "first\nsecond\nthird";
        assert_eq!(offset_to_line_column(input, 0), (1, 1));
        assert_eq!(offset_to_line_column(input, 4), (1, 5));
        assert_eq!(offset_to_line_column(input, 6), (2, 1));
        assert_eq!(offset_to_line_column(input, 13), (3, 1));
    }

    #[test]
    fn offset_past_end_points_at_last_line() {
        let (line, column) = offset_to_line_column("ab\ncd", 5);
        assert_eq!((line, column), (2, 3));
    }
}
