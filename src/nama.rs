//! The Nama pipeline: syntax tree, grammar, and HTML renderer.

pub mod ast;
pub mod grammar;
pub mod renderer;

pub use grammar::parse_document;
