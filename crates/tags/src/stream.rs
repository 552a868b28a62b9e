//! Incremental output of rendered HTML.

use std::borrow::Cow;
use std::io;
use zenhtml_core::{LOG_TARGET, Node};

/// Prefix emitted before a full document.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// A stream of HTML chunks, optionally preceded by a doctype.
///
/// Wraps a node's token stream or any other iterator of string chunks, so an
/// HTTP layer can forward output as it is produced.
///
/// # Example
///
/// ```
/// use zenhtml_tags::{HtmlStream, tags};
///
/// let node = tags::div().child("hi").build().unwrap();
/// let html = HtmlStream::from_node(&node).with_doctype().into_string();
/// assert_eq!(html, "<!DOCTYPE html><div>hi</div>");
/// ```
pub struct HtmlStream<'a> {
    doctype: bool,
    chunks: Box<dyn Iterator<Item = Cow<'a, str>> + 'a>,
}

impl<'a> HtmlStream<'a> {
    /// Streams the tokens of `node`.
    pub fn from_node(node: &'a Node) -> Self {
        Self {
            doctype: false,
            chunks: Box::new(node.tokens()),
        }
    }

    /// Streams arbitrary pre-rendered chunks.
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Into<Cow<'a, str>> + 'a,
    {
        Self {
            doctype: false,
            chunks: Box::new(chunks.into_iter().map(Into::into)),
        }
    }

    /// Emits [`DOCTYPE`] before the first chunk.
    pub fn with_doctype(mut self) -> Self {
        self.doctype = true;
        self
    }

    /// Writes every chunk to `writer`, returning the number of bytes written.
    pub fn write_to<W: io::Write>(self, mut writer: W) -> io::Result<usize> {
        let mut written = 0;
        for chunk in self {
            writer.write_all(chunk.as_bytes())?;
            written += chunk.len();
        }
        writer.flush()?;
        log::debug!(target: LOG_TARGET, "streamed {written} bytes of html");
        Ok(written)
    }

    /// Collects the stream into one string.
    pub fn into_string(self) -> String {
        self.collect()
    }
}

impl<'a> Iterator for HtmlStream<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.doctype {
            self.doctype = false;
            return Some(Cow::Borrowed(DOCTYPE));
        }
        self.chunks.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_pass_through() {
        let html = HtmlStream::from_chunks(["<div>", "</div>"])
            .with_doctype()
            .into_string();
        assert_eq!(html, "<!DOCTYPE html><div></div>");
    }

    #[test]
    fn owned_chunks_are_accepted() {
        let chunks = vec![String::from("<p>"), String::from("</p>")];
        assert_eq!(HtmlStream::from_chunks(chunks).count(), 2);
    }

    #[test]
    fn write_to_counts_bytes() {
        let mut out = Vec::new();
        let written = HtmlStream::from_chunks(["ab", "cde"])
            .write_to(&mut out)
            .unwrap();
        assert_eq!(written, 5);
        assert_eq!(out, b"abcde");
    }
}
