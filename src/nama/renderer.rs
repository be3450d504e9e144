//! Tree-to-HTML rendering.
//!
//! A structural, bottom-up transform: one rule per node kind, children
//! rendered before parents, concatenated in source order with no added
//! separators. The output is valid but unformatted HTML; pretty-printing
//! is the caller's concern.
//!
//! Known gaps carried over deliberately: plain text is emitted without
//! escaping, references render as bare placeholder text, and the
//! `footnotes` flag of a sources block is not yet reflected in output.

use std::fmt;

use crate::nama::ast::{Case, CaseItem, Content, Document, HtmlTag, Inline, Text};

/// Rendering failure. Exhaustive matching over the closed node enums makes
/// unknown shapes impossible at compile time; what remains is input the
/// types can express but the grammar never produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    UnhandledNode(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnhandledNode(what) => write!(f, "unhandled node: {}", what),
        }
    }
}

impl std::error::Error for RenderError {}

/// Render a document into a full HTML5 page string.
pub fn render(doc: &Document) -> Result<String, RenderError> {
    let content = render_content(&doc.content)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{content}\n</body>\n</html>\n",
        title = doc.title,
        content = content,
    ))
}

fn render_content(content: &Content) -> Result<String, RenderError> {
    let mut html = String::from("<div class=\"content\">");
    for case in &content.cases {
        html.push_str(&render_case(case)?);
    }
    html.push_str("</div>");
    Ok(html)
}

fn render_case(case: &Case) -> Result<String, RenderError> {
    let mut html = format!("<div class=\"case\" data-name=\"{}\"", case.name);
    if let Some(url) = &case.url {
        html.push_str(&format!(" data-url=\"{}\"", url));
    }
    html.push('>');
    for item in &case.body {
        match item {
            CaseItem::Text(text) => html.push_str(&render_text(text)?),
            CaseItem::Case(nested) => html.push_str(&render_case(nested)?),
            CaseItem::Sources(_) => html.push_str("<div class=\"sources\"></div>"),
        }
    }
    html.push_str("</div>");
    Ok(html)
}

fn render_text(text: &Text) -> Result<String, RenderError> {
    let mut html = String::new();
    for node in &text.inline {
        html.push_str(&render_inline(node)?);
    }
    Ok(html)
}

fn render_inline(node: &Inline) -> Result<String, RenderError> {
    match node {
        Inline::Plain { text } => Ok(text.clone()),
        Inline::Ref { name } => Ok(name.clone()),
        Inline::Link { url, text } => Ok(format!("<a href=\"{}\">{}</a>", url, text)),
        Inline::Image { path, alt } => Ok(format!("<img src=\"{}\" alt=\"{}\">", path, alt)),
        Inline::Tag(tag) => render_tag(tag),
    }
}

/// Reconstruct a passthrough tag verbatim.
fn render_tag(tag: &HtmlTag) -> Result<String, RenderError> {
    if tag.closing && tag.self_closing {
        // The grammar never produces this combination.
        return Err(RenderError::UnhandledNode(format!(
            "tag <{}> flagged both closing and self-closing",
            tag.name
        )));
    }
    if tag.closing {
        return Ok(format!("</{}>", tag.name));
    }
    let mut html = format!("<{}", tag.name);
    for attr in &tag.attrs {
        match &attr.value {
            Some(value) => html.push_str(&format!(" {}=\"{}\"", attr.name, value)),
            None => html.push_str(&format!(" {}", attr.name)),
        }
    }
    html.push_str(if tag.self_closing { "/>" } else { ">" });
    Ok(html)
}
