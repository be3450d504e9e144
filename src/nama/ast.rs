//! Syntax tree for Nama documents.
//!
//! The grammar produces exactly one of these trees per successful parse.
//! Nodes own their children outright (no sharing, no back-references) and
//! are never mutated after construction; the renderer only borrows them.
//!
//! Invariants upheld by the grammar:
//! - `Case::name` is never empty.
//! - `Link` and `Image` never carry an empty url/path or text/alt.
//! - `Text::inline` and `Plain::text` are never empty.

use serde::{Deserialize, Serialize};

/// Root of a parsed Nama document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Whether the `!nlp` flag was present. Carried in the tree; the
    /// renderer does not act on it yet.
    pub nlp: bool,
    pub content: Content,
}

/// The `content { ... }` block: an ordered run of top-level cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub cases: Vec<Case>,
}

/// A `case(name)` block, optionally tagged with a `(url)`. The body keeps
/// its items in source order and may nest further cases without bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub url: Option<String>,
    pub body: Vec<CaseItem>,
}

/// One item of a case body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseItem {
    Text(Text),
    Case(Case),
    Sources(Sources),
}

/// A `text{...}` block: one or more inline nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub inline: Vec<Inline>,
}

/// One atomic unit of text-block content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    /// `${name}`: an unresolved reference, rendered as placeholder text.
    Ref { name: String },
    /// `{url}{text}`: an external link.
    Link { url: String, text: String },
    /// `{path}{alt}`: an image; the path character class is what separates
    /// this from `Link` at parse time.
    Image { path: String, alt: String },
    /// A passthrough HTML tag, emitted unchanged by the renderer.
    Tag(HtmlTag),
    /// A literal run of characters.
    Plain { text: String },
}

/// A passthrough HTML tag. Closing tags (`</name>`) are folded in via the
/// `closing` flag rather than a separate node kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlTag {
    pub name: String,
    pub attrs: Vec<HtmlAttr>,
    pub self_closing: bool,
    pub closing: bool,
}

/// An attribute inside a passthrough tag: bare `name` or `name="value"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlAttr {
    pub name: String,
    pub value: Option<String>,
}

/// A `sources{}` marker, optionally carrying the `{footnotes}` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sources {
    pub footnotes: bool,
}

impl Document {
    pub fn new(title: String, nlp: bool, content: Content) -> Self {
        Self {
            title,
            nlp,
            content,
        }
    }
}

impl Content {
    pub fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    pub fn empty() -> Self {
        Self { cases: Vec::new() }
    }
}

impl Case {
    pub fn new(name: String, url: Option<String>, body: Vec<CaseItem>) -> Self {
        Self { name, url, body }
    }
}

impl Text {
    pub fn new(inline: Vec<Inline>) -> Self {
        Self { inline }
    }
}

impl HtmlTag {
    /// An opening (or closing, or self-closing) tag with no attributes.
    pub fn bare(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            self_closing: false,
            closing: false,
        }
    }
}
