#![deny(missing_docs)]
//! zenhtml tags: per-tag constructors, document assembly and streaming on top
//! of `zenhtml-core`.

/// Full-page assembly.
pub mod document;
/// Chunked output with an optional doctype.
pub mod stream;
/// Generated per-tag constructors.
pub mod tags;

pub use document::HtmlDocument;
pub use stream::{DOCTYPE, HtmlStream};
pub use tags::ALL_TAGS;
pub use zenhtml_core::{Element, HtmlError, Node, Options, PropValue, Props, TagSchema, raw};
