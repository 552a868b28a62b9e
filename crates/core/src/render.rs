//! HTML rendering.
//!
//! [`Node::tokens`] walks the tree depth-first without recursion and yields
//! output fragments lazily. Concatenating them gives [`Node::to_html`].

use crate::node::{AttrValue, Child, Node};
use html_escape::{encode_quoted_attribute, encode_text};
use std::borrow::Cow;
use std::fmt;

/// Indentation unit of pretty output.
const INDENT: &str = "  ";

enum Frame<'a> {
    Open(&'a Node),
    Attr(&'a Node, usize),
    Body(&'a Node, usize),
}

/// Lazy stream of HTML fragments for one tree.
pub struct Tokens<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![Frame::Open(node)],
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Open(node) => {
                    self.stack.push(Frame::Attr(node, 0));
                    return Some(Cow::Owned(format!("<{}", node.tag())));
                }
                Frame::Attr(node, index) => match node.attributes().get_index(index) {
                    Some((name, value)) => {
                        self.stack.push(Frame::Attr(node, index + 1));
                        return Some(Cow::Owned(attribute(name, value)));
                    }
                    None if node.is_void() => return Some(Cow::Borrowed("/>")),
                    None => {
                        self.stack.push(Frame::Body(node, 0));
                        return Some(Cow::Borrowed(">"));
                    }
                },
                Frame::Body(node, index) => match node.children().get(index) {
                    Some(child) => {
                        self.stack.push(Frame::Body(node, index + 1));
                        match child {
                            Child::Text(text) => return Some(encode_text(text)),
                            Child::Raw(raw) => return Some(Cow::Borrowed(raw.as_str())),
                            Child::Element(inner) => self.stack.push(Frame::Open(inner)),
                        }
                    }
                    None => return Some(Cow::Owned(format!("</{}>", node.tag()))),
                },
            }
        }
    }
}

/// Attribute-escaped value, or the raw markup verbatim.
pub(crate) fn attribute_text(value: &AttrValue) -> Option<Cow<'_, str>> {
    match value {
        AttrValue::Text(text) => Some(encode_quoted_attribute(text)),
        AttrValue::Raw(raw) => Some(Cow::Borrowed(raw.as_str())),
        AttrValue::Flag => None,
    }
}

fn attribute(name: &str, value: &AttrValue) -> String {
    match attribute_text(value) {
        Some(text) => format!(" {name}='{text}'"),
        None => format!(" {name}"),
    }
}

impl Node {
    /// Fragments of the rendered HTML, produced lazily.
    ///
    /// # Examples
    ///
    /// ```
    /// use zenhtml_core::Element;
    ///
    /// let node = Element::new("p").child("a < b").build().unwrap();
    /// let tokens: Vec<_> = node.tokens().collect();
    /// assert_eq!(tokens, ["<p", ">", "a &lt; b", "</p>"]);
    /// ```
    pub fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }

    /// Renders the tree as one string.
    pub fn to_html(&self) -> String {
        self.tokens().collect()
    }

    /// Renders the tree one element per line, two spaces per depth,
    /// starting at depth `indent`.
    pub fn to_pretty_string(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_pretty(indent, &mut out);
        out
    }

    fn write_pretty(&self, depth: usize, out: &mut String) {
        let pad = INDENT.repeat(depth);
        out.push_str(&pad);
        out.push('<');
        out.push_str(self.tag());
        for (name, value) in self.attributes() {
            out.push_str(&attribute(name, value));
        }
        if self.is_void() {
            out.push_str(" />");
            return;
        }
        out.push_str(">\n");

        let child_pad = INDENT.repeat(depth + 1);
        for (index, child) in self.children().iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            match child {
                Child::Text(text) => {
                    out.push_str(&child_pad);
                    out.push_str(&encode_text(text));
                }
                Child::Raw(raw) => {
                    out.push_str(&child_pad);
                    out.push_str(raw.as_str());
                }
                Child::Element(inner) => inner.write_pretty(depth + 1, out),
            }
        }

        out.push('\n');
        out.push_str(&pad);
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens() {
            f.write_str(&token)?;
        }
        Ok(())
    }
}
