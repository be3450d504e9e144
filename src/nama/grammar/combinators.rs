//! Shared combinator primitives for the Nama grammar.
//!
//! Everything here operates on a raw character stream; no rule above this
//! module matches characters directly. Each primitive is a pure parser
//! value: on failure it consumes nothing, so enclosing ordered choices can
//! retry the next alternative from the same position.

use chumsky::prelude::*;

/// Parser error type used throughout the grammar.
pub(crate) type ParserError = Simple<char>;

/// One or more whitespace characters (newlines included).
pub(crate) fn space() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}

/// Zero or more whitespace characters (newlines included).
pub(crate) fn padding() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_whitespace()).repeated().ignored()
}

/// Characters allowed in a URL slot (`case(...)(url)` tags and `{url}{text}`
/// links). Deliberately broader than [`is_path_char`].
pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '.' | '_' | '~' | ':' | '/' | '?' | '#' | '[' | ']' | '@' | '!' | '$' | '&'
                | '\'' | '*' | '+' | ',' | ';' | '='
        )
}

/// Characters allowed in an image path. A strict subset of the URL class:
/// the missing characters (`:`, `?`, `#`, ...) are what let ordered choice
/// tell `{path}{alt}` images apart from `{url}{text}` links.
pub(crate) fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '/')
}

/// One or more URL characters.
pub(crate) fn url_chars() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| is_url_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// One or more path characters.
pub(crate) fn path_chars() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| is_path_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// One or more characters that are not braces. Link text and image alt text
/// use this class; excluding both braces is what makes nested braces fail
/// the construct instead of being swallowed.
pub(crate) fn brace_free_text() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| *c != '{' && *c != '}')
        .repeated()
        .at_least(1)
        .collect::<String>()
}
