//! Structured form of a tree: `{tag, attributes, children}` as JSON.
//!
//! String leaves hold the escaped text exactly as it appears in
//! [`Node::to_html`], so the structured form can be compared in snapshots
//! and turned back into an equivalent node.

use crate::config::Options;
use crate::error::HtmlError;
use crate::node::{Child, Content, Element, Node};
use crate::render::attribute_text;
use crate::schema::TagSchema;
use crate::value::{PropValue, raw};
use html_escape::encode_text;
use serde_json::{Map, Value, json};

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

impl Node {
    /// Converts the tree to its structured form.
    ///
    /// # Examples
    ///
    /// ```
    /// use zenhtml_core::Element;
    /// use serde_json::json;
    ///
    /// let node = Element::new("p").attr("hidden", true).child("a&b").build().unwrap();
    /// assert_eq!(
    ///     node.to_structured(),
    ///     json!({"tag": "p", "attributes": {"hidden": true}, "children": ["a&amp;b"]})
    /// );
    /// ```
    pub fn to_structured(&self) -> Value {
        let attributes: Map<String, Value> = self
            .attributes()
            .iter()
            .map(|(name, value)| {
                let value = match attribute_text(value) {
                    Some(text) => Value::String(text.into_owned()),
                    None => Value::Bool(true),
                };
                (name.clone(), value)
            })
            .collect();

        let children: Vec<Value> = self
            .children()
            .iter()
            .map(|child| match child {
                Child::Text(text) => Value::String(encode_text(text).into_owned()),
                Child::Raw(markup) => Value::String(markup.as_str().to_string()),
                Child::Element(node) => node.to_structured(),
            })
            .collect();

        json!({
            "tag": self.tag(),
            "attributes": attributes,
            "children": children,
        })
    }

    /// Rebuilds a node from its structured form using the built-in schema
    /// and the process-wide mode.
    pub fn from_structured(value: &Value) -> Result<Node, HtmlError> {
        Self::from_structured_with(value, TagSchema::standard(), &Options::from_global())
    }

    /// Rebuilds a node from its structured form.
    ///
    /// String leaves are taken as already escaped. Attributes may sit under
    /// `attributes` or `props`.
    pub fn from_structured_with(
        value: &Value,
        schema: &TagSchema,
        options: &Options,
    ) -> Result<Node, HtmlError> {
        let Value::Object(object) = value else {
            return Err(HtmlError::InvalidStructure(format!(
                "expected a map, got {}",
                json_kind(value)
            )));
        };
        let Some(tag) = object.get("tag").and_then(Value::as_str) else {
            return Err(HtmlError::InvalidStructure("missing string 'tag'".to_string()));
        };

        let mut element = Element::new(tag);

        match object.get("attributes").or_else(|| object.get("props")) {
            None | Some(Value::Null) => {}
            Some(Value::Object(attributes)) => {
                for (name, value) in attributes {
                    let value = match value {
                        Value::String(text) => PropValue::Raw(raw(text.as_str())),
                        Value::Bool(_) | Value::Number(_) | Value::Null => {
                            PropValue::from(value.clone())
                        }
                        other => {
                            return Err(HtmlError::InvalidStructure(format!(
                                "attribute '{}' cannot be a {}",
                                name,
                                json_kind(other)
                            )));
                        }
                    };
                    element = element.attr(name.as_str(), value);
                }
            }
            Some(other) => {
                return Err(HtmlError::InvalidStructure(format!(
                    "attributes must be a map, got {}",
                    json_kind(other)
                )));
            }
        }

        match object.get("children") {
            None | Some(Value::Null) => {}
            Some(Value::Array(children)) => {
                for child in children {
                    let content = match child {
                        Value::String(text) => Content::Raw(raw(text.as_str())),
                        Value::Object(_) => {
                            Content::Element(Self::from_structured_with(child, schema, options)?)
                        }
                        other => return Err(HtmlError::InvalidChild(json_kind(other).to_string())),
                    };
                    element = element.child(content);
                }
            }
            Some(other) => {
                return Err(HtmlError::InvalidStructure(format!(
                    "children must be a list, got {}",
                    json_kind(other)
                )));
            }
        }

        element.build_with(schema, options)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        node.to_structured()
    }
}
