use std::collections::HashSet;

use log::debug;

use crate::error::ResolveError;
use crate::loader::DocumentLoader;
use crate::location::resolve_reference;
use crate::xml::{parse_document, Element};
use crate::{WSDL_NAMESPACE, XSD_NAMESPACE};

/// One schema document in a resolved graph: the element tree loaded from a
/// location plus the documents it references.
///
/// A reference is an import from another namespace
/// (<https://www.w3.org/TR/xmlschema-1/#composition-schemaImport>), an
/// include within the same namespace
/// (<https://www.w3.org/TR/xmlschema-1/#compound-schema>), or a WSDL import.
/// References are followed recursively at construction time. The resulting
/// graph is a tree even when the underlying documents form a cycle, because
/// every location is loaded at most once per run and repeat references are
/// dropped.
#[derive(Debug)]
pub struct SchemaDocument {
    location: String,
    document: Element,
    references: Vec<SchemaDocument>,
}

/// State shared by every document loaded within one resolution run.
///
/// `loaded` records each location before its references are walked, so a
/// reference back to an ancestor or an already visited sibling is skipped
/// instead of looping.
pub(crate) struct ResolutionContext<'a> {
    loader: &'a dyn DocumentLoader,
    allow_dtd: bool,
    loaded: HashSet<String>,
}

impl<'a> ResolutionContext<'a> {
    pub(crate) fn new(loader: &'a dyn DocumentLoader, allow_dtd: bool) -> Self {
        Self {
            loader,
            allow_dtd,
            loaded: HashSet::new(),
        }
    }
}

impl SchemaDocument {
    /// Load the document at `location` and, recursively, every referenced
    /// document this run has not seen yet.
    pub(crate) fn load(
        context: &mut ResolutionContext,
        location: &str,
    ) -> Result<Self, ResolveError> {
        debug!("loading schema document from {location}");
        let text = context.loader.load_document(location)?;
        let document = parse_document(&text, location, context.allow_dtd)?;

        // Register the location before walking references, so a cyclic
        // import back to this document is skipped rather than re-loaded.
        context.loaded.insert(location.to_string());

        let mut references = Vec::new();
        for raw in reference_locations(&document) {
            let resolved = resolve_reference(raw, location)?;
            if context.loaded.contains(&resolved) {
                debug!("skipping already loaded schema at {resolved}");
                continue;
            }
            references.push(SchemaDocument::load(context, &resolved)?);
        }

        Ok(SchemaDocument {
            location: location.to_string(),
            document,
            references,
        })
    }

    /// The location this document was loaded from, after normalization.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Root element of the document.
    pub fn document(&self) -> &Element {
        &self.document
    }

    /// Documents referenced by this one, in declaration order.
    pub fn references(&self) -> &[SchemaDocument] {
        &self.references
    }

    /// This document and every document reachable from it, depth-first in
    /// declaration order. This is the order [`find_type`] consults them in.
    ///
    /// [`find_type`]: SchemaDocument::find_type
    pub fn documents(&self) -> Documents<'_> {
        Documents { stack: vec![self] }
    }

    /// The `simpleType` or `complexType` declaration named `name` in this
    /// document alone, first match in document order.
    pub fn declared_type(&self, name: &str) -> Option<&Element> {
        self.document.descendants().find(|element| {
            element.namespace() == Some(XSD_NAMESPACE)
                && matches!(element.name(), "simpleType" | "complexType")
                && element.attribute("name") == Some(name)
        })
    }

    /// Find the declaration of the type named `name` anywhere in the graph.
    ///
    /// The local document wins; after that, references are searched
    /// depth-first in declaration order. `None` is a normal outcome, not a
    /// defect: the name may denote a built-in type or one the caller maps
    /// some other way.
    pub fn find_type(&self, name: &str) -> Option<&Element> {
        self.declared_type(name).or_else(|| {
            self.references
                .iter()
                .find_map(|reference| reference.find_type(name))
        })
    }
}

/// Raw locations referenced by a document, in document order. Three
/// declaration shapes carry one: `wsdl:import/@location`,
/// `xs:import/@schemaLocation` and `xs:include/@schemaLocation`. Shapes
/// without their location attribute describe no loadable document and are
/// passed over.
fn reference_locations(document: &Element) -> impl Iterator<Item = &str> {
    document.descendants().filter_map(|element| {
        if element.namespace() == Some(WSDL_NAMESPACE) && element.name() == "import" {
            element.attribute("location")
        } else if element.namespace() == Some(XSD_NAMESPACE)
            && matches!(element.name(), "import" | "include")
        {
            element.attribute("schemaLocation")
        } else {
            None
        }
    })
}

/// Iterator over a document graph, returned by [`SchemaDocument::documents`].
pub struct Documents<'a> {
    stack: Vec<&'a SchemaDocument>,
}

impl<'a> Iterator for Documents<'a> {
    type Item = &'a SchemaDocument;

    fn next(&mut self) -> Option<Self::Item> {
        let document = self.stack.pop()?;
        self.stack.extend(document.references.iter().rev());
        Some(document)
    }
}
