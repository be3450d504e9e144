//! Inline element parsing for `text{...}` blocks.
//!
//! At every position inside a text block the alternatives are tried in a
//! fixed priority order: reference, image, link, self-closing tag, tag,
//! plain character. Image is tried before link, but what actually keeps the
//! two apart is the character class: an image path stops at the first
//! character outside [`is_path_char`], so a real URL (with `:` or `?`)
//! fails the image rule and falls through to link.
//!
//! Plain text is collected one character at a time: a character only
//! becomes plain after every structured alternative has refused it. That
//! guarantees forward progress (plain never matches zero characters) and
//! reproduces negative-lookahead semantics without a lookahead primitive.
//! Adjacent plain characters are coalesced into a single node afterwards.

use chumsky::prelude::*;

use super::combinators::{brace_free_text, padding, path_chars, space, url_chars, ParserError};
use crate::nama::ast::{HtmlAttr, HtmlTag, Inline};

/// `${name}` where name is alphanumeric or underscore.
fn reference() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    just("${")
        .ignore_then(
            filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .then_ignore(just('}'))
        .map(|name| Inline::Ref { name })
}

/// `{path}{alt}` with the restricted path character class.
fn image() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    path_chars()
        .delimited_by(just('{'), just('}'))
        .then(brace_free_text().delimited_by(just('{'), just('}')))
        .map(|(path, alt)| Inline::Image { path, alt })
}

/// `{url}{text}` with the broad URL character class.
fn link() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    url_chars()
        .delimited_by(just('{'), just('}'))
        .then(brace_free_text().delimited_by(just('{'), just('}')))
        .map(|(url, text)| Inline::Link { url, text })
}

/// A letter-only tag name.
fn tag_name() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_alphabetic())
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// One attribute: whitespace, then `name` or `name="value"`. The value may
/// be empty; it just may not contain a double quote.
fn attribute() -> impl Parser<char, HtmlAttr, Error = ParserError> + Clone {
    space()
        .ignore_then(
            filter(|c: &char| c.is_ascii_alphanumeric() || *c == '-')
                .repeated()
                .at_least(1)
                .collect::<String>(),
        )
        .then(
            just("=\"")
                .ignore_then(filter(|c: &char| *c != '"').repeated().collect::<String>())
                .then_ignore(just('"'))
                .or_not(),
        )
        .map(|(name, value)| HtmlAttr { name, value })
}

/// `<name attrs.../>`: must end in `/>`.
pub(crate) fn self_closing_tag() -> impl Parser<char, HtmlTag, Error = ParserError> + Clone {
    just('<')
        .ignore_then(tag_name())
        .then(attribute().repeated())
        .then_ignore(padding())
        .then_ignore(just("/>"))
        .map(|(name, attrs)| HtmlTag {
            name,
            attrs,
            self_closing: true,
            closing: false,
        })
}

/// `<name attrs...>` or `</name>`. The optional leading `/` sits where the
/// tag name would otherwise start and sets the `closing` flag.
pub(crate) fn html_tag() -> impl Parser<char, HtmlTag, Error = ParserError> + Clone {
    just('<')
        .ignore_then(just('/').or_not())
        .then(tag_name())
        .then(attribute().repeated())
        .then_ignore(padding())
        .then_ignore(just('>'))
        .map(|((slash, name), attrs)| HtmlTag {
            name,
            attrs,
            self_closing: false,
            closing: slash.is_some(),
        })
}

/// Merge adjacent single-character plain nodes into one node per run.
fn coalesce_plain(items: Vec<Inline>) -> Vec<Inline> {
    let mut out: Vec<Inline> = Vec::new();
    for item in items {
        match item {
            Inline::Plain { text: piece } => match out.last_mut() {
                Some(Inline::Plain { text }) => text.push_str(&piece),
                _ => out.push(Inline::Plain { text: piece }),
            },
            other => out.push(other),
        }
    }
    out
}

/// The interior of a `text{...}` block: one or more inline nodes.
pub(crate) fn inline_run() -> impl Parser<char, Vec<Inline>, Error = ParserError> + Clone {
    choice((
        reference(),
        image(),
        link(),
        self_closing_tag().map(Inline::Tag),
        html_tag().map(Inline::Tag),
        // A bare `}` ends the run; anything else the alternatives above
        // refused is one character of plain text.
        filter(|c: &char| *c != '}').map(|c| Inline::Plain {
            text: c.to_string(),
        }),
    ))
    .repeated()
    .at_least(1)
    .map(coalesce_plain)
}
