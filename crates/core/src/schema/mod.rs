//! Per-tag attribute rules and the void element set.
//!
//! The built-in table lives in [`defaults`]; additional tags can be declared
//! in the same shape through serde (`{"props": ["href", {"rel": {...}}]}`)
//! and merged with [`TagSchema::extend`].

pub mod defaults;

use crate::config::LOG_TARGET;
use crate::error::HtmlError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Elements that never have children and self-close.
pub const VOID_TAGS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Props every tag gets when it declares none of its own.
pub const COMMON_PROPS: [&str; 3] = ["class", "id", "name"];

/// Returns true if `tag` is a void element.
pub fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// How a declared prop is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    /// Any value; stringified.
    #[default]
    Str,
    /// Must be a genuine boolean.
    Bool,
    /// Must be one of `values`.
    Choices,
}

/// Options attached to a declared prop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropOptions {
    /// Value kind (defaults to `str`).
    #[serde(default)]
    pub kind: PropKind,
    /// Permitted values for `choices`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Whether the prop must be supplied.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

/// A prop as written in a tag declaration: a bare name or `{name: options}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropDeclaration {
    /// Plain string prop.
    Name(String),
    /// Single-entry map from the prop name to its options.
    Detailed(BTreeMap<String, PropOptions>),
}

/// Declaration of one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagConfig {
    /// Declared props; `None` means [`COMMON_PROPS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<PropDeclaration>>,
}

/// A declared prop after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropSpec {
    /// HTML attribute name.
    pub name: String,
    /// Checking options.
    pub options: PropOptions,
}

impl PropSpec {
    /// A plain string prop.
    pub fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: PropOptions::default(),
        }
    }

    /// A boolean prop.
    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            options: PropOptions {
                kind: PropKind::Bool,
                ..PropOptions::default()
            },
        }
    }

    /// An enumerated prop.
    pub fn choices(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            options: PropOptions {
                kind: PropKind::Choices,
                values: values.iter().map(|v| v.to_string()).collect(),
                required: false,
            },
        }
    }

    /// Marks the prop as required.
    pub fn required(mut self) -> Self {
        self.options.required = true;
        self
    }
}

impl TagConfig {
    /// Normalizes the declarations of this tag.
    pub fn prop_specs(&self) -> Result<Vec<PropSpec>, HtmlError> {
        let Some(props) = &self.props else {
            return Ok(COMMON_PROPS.iter().map(|name| PropSpec::plain(name)).collect());
        };

        props
            .iter()
            .map(|decl| match decl {
                PropDeclaration::Name(name) => Ok(PropSpec::plain(name)),
                PropDeclaration::Detailed(map) if map.len() == 1 => {
                    let (name, options) = map.iter().next().ok_or_else(|| {
                        HtmlError::InvalidSchema("empty prop declaration".to_string())
                    })?;
                    Ok(PropSpec {
                        name: name.clone(),
                        options: options.clone(),
                    })
                }
                PropDeclaration::Detailed(map) => Err(HtmlError::InvalidSchema(format!(
                    "prop declaration must have exactly one entry, got {}",
                    map.len()
                ))),
            })
            .collect()
    }
}

/// Constraints checked for one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRule {
    /// Declared prop names in declaration order.
    pub props: Vec<String>,
    /// Attributes that must be present.
    pub required: BTreeSet<String>,
    /// Attributes that must be genuine booleans.
    pub booleans: BTreeSet<String>,
    /// Enumerated attributes and their permitted values.
    pub choices: IndexMap<String, Vec<String>>,
}

impl TagRule {
    /// Builds a rule from normalized prop declarations.
    pub fn from_specs(specs: &[PropSpec]) -> Self {
        let mut rule = TagRule::default();
        for spec in specs {
            rule.props.push(spec.name.clone());
            if spec.options.required {
                rule.required.insert(spec.name.clone());
            }
            match spec.options.kind {
                PropKind::Bool => {
                    rule.booleans.insert(spec.name.clone());
                }
                PropKind::Choices if !spec.options.values.is_empty() => {
                    rule.choices
                        .insert(spec.name.clone(), spec.options.values.clone());
                }
                _ => {}
            }
        }
        rule
    }

    /// Permitted values when `name` is enumerated.
    pub fn choices_for(&self, name: &str) -> Option<&[String]> {
        self.choices.get(name).map(Vec::as_slice)
    }

    /// Whether `name` must be a boolean.
    pub fn is_boolean(&self, name: &str) -> bool {
        self.booleans.contains(name)
    }

    /// Whether the rule carries any constraint at all.
    pub fn is_unconstrained(&self) -> bool {
        self.required.is_empty() && self.booleans.is_empty() && self.choices.is_empty()
    }
}

/// Mapping from tag name to its rule. Tags not listed are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSchema {
    rules: IndexMap<String, TagRule>,
}

static STANDARD_SCHEMA: Lazy<TagSchema> = Lazy::new(|| {
    let mut schema = TagSchema::default();
    for (tag, specs) in defaults::standard_tag_specs() {
        schema.insert(tag, TagRule::from_specs(&specs));
    }
    schema
});

impl TagSchema {
    /// The built-in schema, built once on first use.
    pub fn standard() -> &'static TagSchema {
        &STANDARD_SCHEMA
    }

    /// Builds a schema from tag declarations.
    pub fn from_config(config: &IndexMap<String, TagConfig>) -> Result<Self, HtmlError> {
        let mut schema = TagSchema::default();
        for (tag, tag_config) in config {
            let specs = tag_config.prop_specs()?;
            schema.insert(tag.clone(), TagRule::from_specs(&specs));
        }
        log::debug!(target: LOG_TARGET, "built tag schema with {} tags", schema.len());
        Ok(schema)
    }

    /// Parses tag declarations from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use zenhtml_core::TagSchema;
    ///
    /// let schema = TagSchema::from_json(
    ///     r#"{"my-widget": {"props": [{"size": {"kind": "choices", "values": ["s", "m"]}}]}}"#,
    /// ).unwrap();
    /// let rule = schema.rule("my-widget").unwrap();
    /// assert_eq!(rule.choices_for("size").unwrap(), ["s", "m"]);
    /// ```
    pub fn from_json(input: &str) -> Result<Self, HtmlError> {
        let config: IndexMap<String, TagConfig> =
            serde_json::from_str(input).map_err(|err| HtmlError::InvalidSchema(err.to_string()))?;
        Self::from_config(&config)
    }

    /// Adds or replaces the rule for `tag`.
    pub fn insert(&mut self, tag: impl Into<String>, rule: TagRule) {
        self.rules.insert(tag.into(), rule);
    }

    /// Merges `other` into this schema; its rules win on conflict.
    pub fn extend(&mut self, other: TagSchema) {
        self.rules.extend(other.rules);
    }

    /// Returns the rule for `tag`, if the tag is known.
    pub fn rule(&self, tag: &str) -> Option<&TagRule> {
        self.rules.get(tag)
    }

    /// Whether `tag` has a rule.
    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Known tags in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Number of known tags.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
