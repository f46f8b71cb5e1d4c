//! Resolves a network of interlinked WSDL/XSD schema documents into one
//! logical type namespace.
//!
//! Starting from a root location, every imported or included document is
//! discovered and loaded exactly once, relative references are normalized
//! against the document that declares them, and the finished graph answers a
//! single question: where is the type with a given name declared?
//!
//! ```no_run
//! use schema_resolver::{resolve_schema, Config};
//!
//! let schema = resolve_schema(&Config::default(), "https://example.org/service.wsdl")?;
//! if let Some(declaration) = schema.find_type("Address") {
//!     println!("Address is declared as a {}", declaration.name());
//! }
//! # Ok::<(), schema_resolver::ResolveError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod location;
pub mod schema;
pub mod xml;

pub use config::{Config, ProxySettings};
pub use error::ResolveError;
pub use loader::{DocumentLoader, NetworkLoader};
pub use schema::{Documents, SchemaDocument};
pub use xml::{Attribute, Descendants, Element};

use schema::ResolutionContext;

/// The WSDL 1.1 namespace, home of `wsdl:import`.
pub const WSDL_NAMESPACE: &str = "http://schemas.xmlsoap.org/wsdl/";

/// The XML Schema namespace, home of `xs:import`, `xs:include` and the type
/// declarations themselves.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Resolve the schema graph rooted at `location`, fetching documents with a
/// [`NetworkLoader`] built from `config`.
pub fn resolve_schema(config: &Config, location: &str) -> Result<SchemaDocument, ResolveError> {
    let loader = NetworkLoader::new(config)?;
    resolve_schema_with_loader(config, &loader, location)
}

/// Resolve the schema graph rooted at `location` with a caller-provided
/// document loader.
///
/// The loader decides what a location means; `config` still controls XML
/// parsing. One call is one resolution run: the set of already loaded
/// locations is scoped to the call and shared with nothing else.
pub fn resolve_schema_with_loader(
    config: &Config,
    loader: &dyn DocumentLoader,
    location: &str,
) -> Result<SchemaDocument, ResolveError> {
    let mut context = ResolutionContext::new(loader, config.allow_dtd);
    SchemaDocument::load(&mut context, location)
}
