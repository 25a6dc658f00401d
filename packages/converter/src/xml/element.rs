//! Owned element tree built from a parsed XML document.
//!
//! Each element carries its direct text and its tail, i.e. the text that
//! follows the element inside its parent up to the next sibling element.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;

/// An XML element with its text content split into `text` and `tail`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Local tag name, without namespace.
    pub tag: String,

    /// Text before the first child element.
    pub text: Option<String>,

    /// Text after this element, before the next sibling element.
    pub tail: Option<String>,

    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the direct text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the tail text.
    #[must_use]
    pub fn with_tail(mut self, tail: impl Into<String>) -> Self {
        self.tail = Some(tail.into());
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Parse an XML string and return its root element.
    ///
    /// # Examples
    /// ```
    /// use keiho_converter::xml::Element;
    ///
    /// let root = Element::parse("<Law><LawNum>明治四十年法律第四十五号</LawNum></Law>").unwrap();
    /// assert_eq!(root.tag, "Law");
    /// assert_eq!(root.children[0].text.as_deref(), Some("明治四十年法律第四十五号"));
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        // Statute files may carry a DOCTYPE declaration
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)?;
        Ok(Self::from_node(doc.root_element()))
    }

    /// Build an owned element from a roxmltree element node.
    ///
    /// Comments and processing instructions are dropped; text on either side
    /// of them is joined into the same `text` or `tail`.
    #[must_use]
    pub fn from_node(node: Node<'_, '_>) -> Self {
        let mut element = Self::new(node.tag_name().name());

        for child in node.children() {
            if child.is_element() {
                element.children.push(Self::from_node(child));
            } else if child.is_text() {
                let Some(text) = child.text() else { continue };
                let slot = match element.children.last_mut() {
                    Some(last) => &mut last.tail,
                    None => &mut element.text,
                };
                slot.get_or_insert_with(String::new).push_str(text);
            }
        }

        element
    }

    /// Whether this element has the given tag name.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// Iterate over all descendants in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over the descendants of an [`Element`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
