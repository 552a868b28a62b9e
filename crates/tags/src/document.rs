//! Full-page assembly.

use crate::tags;
use serde::{Deserialize, Serialize};
use zenhtml_core::{HtmlError, Node, Options, TagSchema};

fn default_lang() -> String {
    "en".to_string()
}

/// A complete HTML page: head metadata, assets and body content.
///
/// Metadata fields (de)serialize, so page settings can come from JSON; the
/// `head` and `body` nodes are always supplied in code.
///
/// # Example
///
/// ```
/// use zenhtml_tags::{HtmlDocument, tags};
///
/// let page = HtmlDocument::new("Hello")
///     .stylesheet("/site.css")
///     .body_node(tags::p().child("hi").build().unwrap())
///     .build()
///     .unwrap();
/// let html = page.to_html();
/// assert!(html.starts_with("<html lang='en'><head><meta charset='utf-8'/>"));
/// assert!(html.ends_with("<body><p>hi</p></body></html>"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlDocument {
    /// Contents of `<title>`
    pub title: String,
    /// `<meta name="description">` content
    #[serde(default)]
    pub description: String,
    /// `<meta name="keywords">` content
    #[serde(default)]
    pub keywords: String,
    /// Stylesheet hrefs, linked in order
    #[serde(default)]
    pub css: Vec<String>,
    /// Script srcs, loaded in order
    #[serde(default)]
    pub scripts: Vec<String>,
    /// Value of the `lang` attribute on `<html>`
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Extra nodes appended to `<head>`
    #[serde(skip)]
    pub head: Vec<Node>,
    /// Body content
    #[serde(skip)]
    pub body: Vec<Node>,
}

impl HtmlDocument {
    /// Starts a document with `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            keywords: String::new(),
            css: Vec::new(),
            scripts: Vec::new(),
            lang: default_lang(),
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Sets the description meta tag.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the keywords meta tag.
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    /// Adds a stylesheet link.
    pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
        self.css.push(href.into());
        self
    }

    /// Adds a script.
    pub fn script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }

    /// Sets the document language.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Appends a node to `<head>`.
    pub fn head_node(mut self, node: Node) -> Self {
        self.head.push(node);
        self
    }

    /// Appends a node to `<body>`.
    pub fn body_node(mut self, node: Node) -> Self {
        self.body.push(node);
        self
    }

    /// Assembles the page with the built-in schema and the process-wide mode.
    pub fn build(self) -> Result<Node, HtmlError> {
        self.build_with(TagSchema::standard(), &Options::from_global())
    }

    /// Assembles the page.
    pub fn build_with(self, schema: &TagSchema, options: &Options) -> Result<Node, HtmlError> {
        let HtmlDocument {
            title,
            description,
            keywords,
            css,
            scripts,
            lang,
            head,
            body,
        } = self;

        let mut head_el = tags::head()
            .child(tags::meta().attr("charset", "utf-8").build_with(schema, options)?)
            .child(
                tags::meta()
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1")
                    .build_with(schema, options)?,
            )
            .child(
                tags::meta()
                    .attr("name", "description")
                    .attr("content", description)
                    .build_with(schema, options)?,
            )
            .child(
                tags::meta()
                    .attr("name", "keywords")
                    .attr("content", keywords)
                    .build_with(schema, options)?,
            )
            .child(
                tags::meta()
                    .attr("httpEquiv", "Pragma")
                    .attr("content", "no-cache")
                    .build_with(schema, options)?,
            )
            .child(
                tags::meta()
                    .attr("httpEquiv", "Cache-Control")
                    .attr("content", "no-store")
                    .build_with(schema, options)?,
            )
            .child(tags::title().child(title).build_with(schema, options)?);

        for href in css {
            head_el = head_el.child(
                tags::link()
                    .attr("href", href)
                    .attr("rel", "stylesheet")
                    .build_with(schema, options)?,
            );
        }
        for src in scripts {
            head_el = head_el.child(tags::script().attr("src", src).build_with(schema, options)?);
        }
        head_el = head_el.child(head);

        tags::html()
            .child(head_el.build_with(schema, options)?)
            .child(tags::body().child(body).build_with(schema, options)?)
            .attr("lang", lang)
            .build_with(schema, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_deserializes_with_defaults() {
        let doc: HtmlDocument =
            serde_json::from_str(r#"{"title": "Docs", "css": ["/a.css"]}"#).unwrap();
        assert_eq!(doc.lang, "en");
        assert_eq!(doc.css, ["/a.css"]);
        assert!(doc.body.is_empty());
    }

    #[test]
    fn head_order_is_fixed() {
        let page = HtmlDocument::new("T")
            .script("/app.js")
            .stylesheet("/app.css")
            .head_node(
                tags::meta()
                    .attr("name", "robots")
                    .attr("content", "noindex")
                    .build_with(TagSchema::standard(), &Options::strict())
                    .unwrap(),
            )
            .build_with(TagSchema::standard(), &Options::strict())
            .unwrap();
        let html = page.to_html();
        let title = html.find("<title>T</title>").unwrap();
        let css = html.find("<link href='/app.css' rel='stylesheet'/>").unwrap();
        let js = html.find("<script src='/app.js'></script>").unwrap();
        let robots = html.find("name='robots'").unwrap();
        assert!(title < css && css < js && js < robots);
    }
}
