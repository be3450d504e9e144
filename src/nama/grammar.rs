//! The Nama grammar, built from chumsky combinators.
//!
//! The grammar has PEG semantics: ordered choice commits to the first
//! alternative that succeeds, sequences backtrack without consuming on
//! failure, and repetition is greedy. There is no memoization; deeply
//! nested ambiguous input can backtrack repeatedly.
//!
//! - `combinators`: shared character-class and whitespace primitives
//! - `inlines`: the `text{...}` interior: refs, links, images, tags, plain
//! - `blocks`: title, case, sources, content, and the document rule
//! - `api`: the public [`parse_document`] entry point

pub mod api;
pub mod blocks;
pub mod combinators;
pub mod inlines;

pub use api::parse_document;
