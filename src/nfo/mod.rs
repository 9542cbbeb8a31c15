//! In-memory descriptor documents and their XML rendering.
//!
//! Descriptors are built as plain element trees by the pure builder functions
//! in the submodules and only turned into text at the very end, once the
//! whole document is known.
mod episode;
mod series;

pub use episode::{episode_details, guest_star_actors};
pub use series::{actor_element, series_document};

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;
use std::io::Cursor;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while rendering a descriptor document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The XML writer rejected an event
    #[error("Failed to write XML: {0}")]
    Write(String),

    /// The rendered buffer was not valid UTF-8
    #[error("Rendered document is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// A child of an element: either a nested element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// A named element with ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element without any content
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    /// Creates an element holding the given text
    ///
    /// Empty text produces an empty element.
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self::new(name).with_text(value)
    }

    /// Creates an element holding the displayed value, or an empty element
    /// when the value is absent
    pub fn maybe<T: Display>(name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => Self::text(name, value.to_string()),
            None => Self::new(name),
        }
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.children.push(Node::Text(value));
        }
        self
    }

    /// Iterates over the direct child elements
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Returns the first direct child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.elements().find(|element| element.name == name)
    }

    /// Concatenates the direct text children
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }
}

/// Renders the given root elements into a single descriptor text.
///
/// The output starts with an XML declaration, followed by the roots back to
/// back without any indentation or line breaks.
pub fn render(roots: &[Element]) -> Result<String, RenderError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| RenderError::Write(e.to_string()))?;

    for root in roots {
        write_element(&mut writer, root)?;
    }

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

fn write_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    element: &Element,
) -> Result<(), RenderError> {
    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(BytesStart::new(element.name)))
            .map_err(|e| RenderError::Write(e.to_string()));
    }

    writer
        .write_event(Event::Start(BytesStart::new(element.name)))
        .map_err(|e| RenderError::Write(e.to_string()))?;

    for child in &element.children {
        match child {
            Node::Element(inner) => write_element(writer, inner)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(|e| RenderError::Write(e.to_string()))?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name)))
        .map_err(|e| RenderError::Write(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_unindented_with_declaration() {
        let doc = Element::new("tvshow")
            .with_child(Element::text("title", "Foo"))
            .with_child(Element::new("url"));

        assert_eq!(
            render(&[doc]).unwrap(),
            r#"<?xml version="1.0" encoding="UTF-8"?><tvshow><title>Foo</title><url/></tvshow>"#
        );
    }

    #[test]
    fn test_render_escapes_text() {
        let doc = Element::text("title", "Law & Order");
        assert!(render(&[doc]).unwrap().contains("<title>Law &amp; Order</title>"));
    }

    #[test]
    fn test_render_multiple_roots_share_one_declaration() {
        let rendered = render(&[Element::text("a", "1"), Element::text("a", "2")]).unwrap();
        assert_eq!(rendered.matches("<?xml").count(), 1);
        assert!(rendered.ends_with("<a>1</a><a>2</a>"));
    }

    #[test]
    fn test_mixed_content_keeps_order() {
        let doc = Element::new("episodeguide")
            .with_child(Element::new("url"))
            .with_text("http://example.com/guide.zip");

        assert!(render(&[doc]).unwrap().ends_with(
            "<episodeguide><url/>http://example.com/guide.zip</episodeguide>"
        ));
    }

    #[test]
    fn test_maybe_and_empty_text() {
        assert!(Element::maybe::<f64>("rating", None).children.is_empty());
        assert_eq!(Element::maybe("rating", Some(8.5)).text_content(), "8.5");
        assert!(Element::text("plot", "").children.is_empty());
    }
}
