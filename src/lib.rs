//! # nama
//!
//! A compiler for the Nama markup format.
//!
//! Nama documents are nested-block markup: a title line, an optional `!nlp`
//! flag, and a `content { ... }` block of recursive `case(...)` blocks that
//! mix `text{...}` runs, nested cases, and `sources{}` markers. This crate
//! parses that source into a typed syntax tree and renders the tree into an
//! HTML fragment. It also parses the companion "webography" record format
//! (flat bibliographic entries) into its own tree.
//!
//! The three entry points are [`parse_document`], [`render`], and
//! [`parse_webography`]. All of them are pure functions of their input; file
//! handling and HTML pretty-printing belong to the caller.

pub mod error;
pub mod nama;
pub mod webography;

pub use error::ParseError;
pub use nama::ast::Document;
pub use nama::parse_document;
pub use nama::renderer::{render, RenderError};
pub use webography::{parse_webography, Webography};
