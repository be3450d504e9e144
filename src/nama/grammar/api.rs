//! Public API for the Nama grammar.

use chumsky::Parser;

use super::blocks::document;
use crate::error::ParseError;
use crate::nama::ast::Document;

/// Parse a complete Nama document.
///
/// The parse is atomic: either the whole input matches the document rule
/// (including end of input) or a [`ParseError`] pointing at the deepest
/// failure is returned. No partial tree is ever produced.
pub fn parse_document(input: &str) -> Result<Document, ParseError> {
    document()
        .parse(input)
        .map_err(|errors| ParseError::from_chumsky(input, errors))
}
