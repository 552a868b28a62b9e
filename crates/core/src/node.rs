//! Immutable element trees and their construction.
//!
//! [`Element`] collects children and properties; [`Element::build`] runs
//! normalization and validation and produces a [`Node`]. Nodes never change
//! after construction, so rendering them is pure.

use crate::config::Options;
use crate::error::HtmlError;
use crate::normalize::{attr_value, resolve};
use crate::schema::{TagSchema, is_void};
use crate::validate::Validator;
use crate::value::{PropValue, Props, RawHtml};
use indexmap::IndexMap;

/// A stored attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Text, attribute-escaped at render time.
    Text(String),
    /// Pre-escaped markup, emitted verbatim.
    Raw(RawHtml),
    /// Boolean attribute present; renders as a bare name.
    Flag,
}

impl AttrValue {
    /// String content, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            AttrValue::Raw(r) => Some(r.as_str()),
            AttrValue::Flag => None,
        }
    }

    /// Whether this is a bare boolean attribute.
    pub fn is_flag(&self) -> bool {
        matches!(self, AttrValue::Flag)
    }
}

/// A child stored in a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    /// Text, escaped at render time.
    Text(String),
    /// Pre-escaped markup.
    Raw(RawHtml),
    /// Nested element.
    Element(Node),
}

/// Children as supplied to a constructor, before flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Text child.
    Text(String),
    /// Raw markup child.
    Raw(RawHtml),
    /// Element child.
    Element(Node),
    /// Any nesting of the above, flattened in order.
    Nested(Vec<Content>),
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Content::Text(value.to_string())
    }
}

impl From<String> for Content {
    fn from(value: String) -> Self {
        Content::Text(value)
    }
}

impl From<&String> for Content {
    fn from(value: &String) -> Self {
        Content::Text(value.clone())
    }
}

impl From<RawHtml> for Content {
    fn from(value: RawHtml) -> Self {
        Content::Raw(value)
    }
}

impl From<Node> for Content {
    fn from(value: Node) -> Self {
        Content::Element(value)
    }
}

impl From<Child> for Content {
    fn from(value: Child) -> Self {
        match value {
            Child::Text(s) => Content::Text(s),
            Child::Raw(r) => Content::Raw(r),
            Child::Element(n) => Content::Element(n),
        }
    }
}

impl<T: Into<Content>> From<Vec<T>> for Content {
    fn from(value: Vec<T>) -> Self {
        Content::Nested(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Content>, const N: usize> From<[T; N]> for Content {
    fn from(value: [T; N]) -> Self {
        Content::Nested(value.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<PropValue> for Content {
    type Error = HtmlError;

    /// Strings become text, raw markers stay raw and lists nest.
    fn try_from(value: PropValue) -> Result<Self, Self::Error> {
        match value {
            PropValue::Str(s) => Ok(Content::Text(s)),
            PropValue::Raw(r) => Ok(Content::Raw(r)),
            PropValue::List(items) => Ok(Content::Nested(
                items
                    .into_iter()
                    .map(Content::try_from)
                    .collect::<Result<_, _>>()?,
            )),
            other => Err(HtmlError::InvalidChild(other.kind().to_string())),
        }
    }
}

fn flatten(content: Vec<Content>, out: &mut Vec<Child>) {
    for item in content {
        match item {
            Content::Text(s) => out.push(Child::Text(s)),
            Content::Raw(r) => out.push(Child::Raw(r)),
            Content::Element(n) => out.push(Child::Element(n)),
            Content::Nested(items) => flatten(items, out),
        }
    }
}

/// One validated HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: String,
    attributes: IndexMap<String, AttrValue>,
    children: Vec<Child>,
}

impl Node {
    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Stored attributes in first-seen order.
    pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
        &self.attributes
    }

    /// Looks up one attribute by HTML name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Flattened children.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Whether the element is void.
    pub fn is_void(&self) -> bool {
        is_void(&self.tag)
    }
}

/// Builder for a [`Node`].
///
/// # Examples
///
/// ```
/// use zenhtml_core::{Element, PropValue};
///
/// let node = Element::new("button")
///     .attr("disabled", true)
///     .dataset(PropValue::map([("foo", "bar")]))
///     .child("Go")
///     .build()
///     .unwrap();
/// assert_eq!(node.to_html(), "<button disabled data-foo='bar'>Go</button>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    children: Vec<Content>,
    children_kw: Option<Vec<Content>>,
    props: Props,
}

impl Element {
    /// Starts an element with `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            children_kw: None,
            props: Props::new(),
        }
    }

    /// Tag being built.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Appends a positional child.
    pub fn child(mut self, child: impl Into<Content>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Supplies children as one aggregate, the `children=` form.
    ///
    /// Mixing this with [`Element::child`] fails at build time.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        self.children_kw
            .get_or_insert_with(Vec::new)
            .extend(children.into_iter().map(Into::into));
        self
    }

    /// Sets a property by its caller-facing name (`ariaLabel`, `for_`).
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.set(name, value);
        self
    }

    /// Sets `class` from a string or a list of strings.
    pub fn class(self, value: impl Into<PropValue>) -> Self {
        self.attr("class", value)
    }

    /// Sets the `dataset` mapping.
    pub fn dataset(self, value: impl Into<PropValue>) -> Self {
        self.attr("dataset", value)
    }

    /// Sets `style` from a mapping or a declaration string.
    pub fn style(self, value: impl Into<PropValue>) -> Self {
        self.attr("style", value)
    }

    /// Merges a property bag. A `children` entry becomes the aggregate.
    pub fn props(mut self, props: Props) -> Self {
        for (name, value) in props {
            self.props.set(name, value);
        }
        self
    }

    /// Builds against the built-in schema in the process-wide mode.
    pub fn build(self) -> Result<Node, HtmlError> {
        self.build_with(TagSchema::standard(), &Options::from_global())
    }

    /// Builds against `schema` with explicit `options`.
    pub fn build_with(self, schema: &TagSchema, options: &Options) -> Result<Node, HtmlError> {
        let Element {
            tag,
            children,
            mut children_kw,
            mut props,
        } = self;

        if let Some(value) = props.remove("children") {
            if !value.is_null() {
                let content = Content::try_from(value)?;
                children_kw.get_or_insert_with(Vec::new).push(content);
            }
        }

        let content = match children_kw {
            Some(_) if !children.is_empty() => return Err(HtmlError::ChildrenConflict),
            Some(kw) => kw,
            None => children,
        };
        let mut flat = Vec::with_capacity(content.len());
        flatten(content, &mut flat);

        let candidates = resolve(props)?;
        let validated =
            Validator::new(schema, *options).validate(&tag, candidates, !flat.is_empty())?;
        if validated.report.discard_children {
            flat.clear();
        }

        let mut attributes = IndexMap::with_capacity(validated.attributes.len());
        for (name, value) in validated.attributes {
            if let Some(value) = attr_value(&name, value)? {
                attributes.insert(name, value);
            }
        }

        Ok(Node {
            tag,
            attributes,
            children: flat,
        })
    }
}

/// Builds `tag` from positional children and a property bag.
///
/// A `children` property is the aggregate form and conflicts with non-empty
/// positional children.
pub fn construct(tag: &str, children: Vec<Content>, props: Props) -> Result<Node, HtmlError> {
    let mut element = Element::new(tag).props(props);
    element.children = children;
    element.build()
}

/// Returns a constructor bound to `tag`.
///
/// # Examples
///
/// ```
/// use zenhtml_core::{constructor, Props};
///
/// let section = constructor("section");
/// let node = section(vec!["hi".into()], Props::new().with("id", "intro")).unwrap();
/// assert_eq!(node.to_html(), "<section id='intro'>hi</section>");
/// ```
pub fn constructor(tag: &str) -> impl Fn(Vec<Content>, Props) -> Result<Node, HtmlError> + use<> {
    let tag = tag.to_string();
    move |children, props| construct(&tag, children, props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::raw;

    fn span(text: &str) -> Node {
        Element::new("span")
            .child(text)
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap()
    }

    #[test]
    fn nested_children_flatten_in_order() {
        let node = Element::new("div")
            .child("a")
            .child(vec![Content::from("b"), Content::from(vec![span("c")])])
            .child(raw("<hr>"))
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap();
        assert_eq!(node.children().len(), 4);
        assert!(matches!(&node.children()[2], Child::Element(n) if n.tag() == "span"));
        assert_eq!(node.children()[3], Child::Raw(raw("<hr>")));
    }

    #[test]
    fn children_conflict_is_structural() {
        let err = Element::new("div")
            .child("a")
            .children(["b"])
            .build_with(TagSchema::standard(), &Options::lenient())
            .unwrap_err();
        assert_eq!(err, HtmlError::ChildrenConflict);
    }

    #[test]
    fn children_property_is_the_aggregate_form() {
        let node = Element::new("p")
            .props(Props::new().with("children", PropValue::list(["x", "y"])))
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap();
        assert_eq!(
            node.children(),
            [Child::Text("x".into()), Child::Text("y".into())]
        );
    }

    #[test]
    fn children_property_rejects_non_strings() {
        let err = Element::new("p")
            .attr("children", PropValue::Int(3))
            .build_with(TagSchema::standard(), &Options::lenient())
            .unwrap_err();
        assert_eq!(err, HtmlError::InvalidChild("int".into()));
    }

    #[test]
    fn false_and_null_are_not_stored() {
        let node = Element::new("input")
            .attr("disabled", false)
            .attr("required", true)
            .attr("value", Option::<&str>::None)
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap();
        let names: Vec<_> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["required"]);
        assert!(node.attribute("required").unwrap().is_flag());
    }

    #[test]
    fn lenient_void_drops_children() {
        let node = Element::new("br")
            .child("oops")
            .build_with(TagSchema::standard(), &Options::lenient())
            .unwrap();
        assert!(node.children().is_empty());
        assert!(node.is_void());
    }

    #[test]
    fn numbers_are_stringified() {
        let node = Element::new("textarea")
            .attr("rows", 3)
            .attr("cols", 1.5)
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap();
        assert_eq!(node.attribute("rows"), Some(&AttrValue::Text("3".into())));
        assert_eq!(node.attribute("cols").and_then(AttrValue::as_str), Some("1.5"));
    }

    #[test]
    fn custom_schema_applies() {
        let schema = TagSchema::from_json(
            r#"{"x-badge": {"props": [{"tone": {"kind": "choices", "values": ["info", "warn"]}}]}}"#,
        )
        .unwrap();
        let err = Element::new("x-badge")
            .attr("tone", "loud")
            .build_with(&schema, &Options::strict())
            .unwrap_err();
        assert!(!err.is_structural());
    }
}
