#![deny(missing_docs)]
//! zenhtml core: schema-validated HTML trees, attribute normalization and an
//! escaping renderer.

/// Validation mode and logging target.
pub mod config;
/// Core error and diagnostic types.
pub mod error;
/// Element trees and their construction.
pub mod node;
/// Property name and value normalization.
pub mod normalize;
/// Token, string and pretty rendering.
pub mod render;
/// Per-tag attribute rules.
pub mod schema;
/// Structured (JSON) form of a tree.
pub mod structured;
/// Schema validation of candidate attributes.
pub mod validate;
/// Property values and the raw-HTML marker.
pub mod value;

pub use config::{LOG_TARGET, Options, set_strict_validation, strict_validation};
pub use error::{HtmlError, ValidationReport, Violation};
pub use node::{AttrValue, Child, Content, Element, Node, construct, constructor};
pub use normalize::html_name;
pub use render::Tokens;
pub use schema::{
    COMMON_PROPS, PropDeclaration, PropKind, PropOptions, PropSpec, TagConfig, TagRule, TagSchema,
    VOID_TAGS, is_void,
};
pub use validate::{Validated, Validator};
pub use value::{PropValue, Props, RawHtml, raw};
