use thiserror::Error;

/// Errors raised while resolving a schema document graph.
///
/// Load and parse failures abort the whole resolution run. A schema graph
/// with a missing document would silently under-report type declarations,
/// which is worse than no graph at all.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The document at `location` could not be fetched.
    #[error("unable to load schema document from {location}")]
    Load {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The document at `location` is not well-formed XML.
    #[error("unable to parse schema document at {location}")]
    Parse {
        location: String,
        #[source]
        source: roxmltree::Error,
    },

    /// A relative reference climbs above the root of its base location, so
    /// there is no directory left to resolve it against.
    #[error("cannot resolve reference {reference:?} against {base:?}: too many `../` segments")]
    MalformedReference { reference: String, base: String },

    #[error("invalid proxy configuration {url:?}")]
    InvalidProxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unable to construct the HTTP client")]
    Client(#[source] reqwest::Error),
}
