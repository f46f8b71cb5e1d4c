use roxmltree::ParsingOptions;

use crate::error::ResolveError;

/// An attribute of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    namespace: Option<String>,
    name: String,
    value: String,
}

impl Attribute {
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// One element of a parsed schema document, owned independently of the
/// parser input.
///
/// `roxmltree` trees borrow the text they were parsed from, so each document
/// is mapped into this owned form once at load time. The mapping keeps only
/// what schema processing looks at: names, attributes, child elements and
/// direct text content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    fn from_node(node: roxmltree::Node) -> Self {
        let tag = node.tag_name();

        let attributes = node
            .attributes()
            .map(|attribute| Attribute {
                namespace: attribute.namespace().map(str::to_string),
                name: attribute.name().to_string(),
                value: attribute.value().to_string(),
            })
            .collect();

        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(Element::from_node)
            .collect();

        let text: String = node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect();
        let text = {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        Element {
            namespace: tag.namespace().map(str::to_string),
            name: tag.name().to_string(),
            attributes,
            children,
            text,
        }
    }

    /// Namespace URI of the element, if it is in one.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local (unprefixed) element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the attribute with the given local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Concatenated direct text content, trimmed. `None` when empty.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// All elements of the subtree in document order, starting with `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Document-order iterator returned by [`Element::descendants`].
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

/// Parse `text` into an owned element tree rooted at the document element.
pub fn parse_document(
    text: &str,
    location: &str,
    allow_dtd: bool,
) -> Result<Element, ResolveError> {
    let options = ParsingOptions {
        allow_dtd,
        ..Default::default()
    };
    let document =
        roxmltree::Document::parse_with_options(text, options).map_err(|source| {
            ResolveError::Parse {
                location: location.to_string(),
                source,
            }
        })?;
    Ok(Element::from_node(document.root_element()))
}
