/// Options for a resolution run.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Route remote document fetches through this proxy.
    pub proxy: Option<ProxySettings>,
    /// Allow a Document Type Definition (DTD) to occur in loaded documents.
    /// Off by default; schemas in the wild rarely carry one.
    pub allow_dtd: bool,
}

/// Proxy endpoint and credentials for fetching remote documents.
#[derive(Clone, Debug)]
pub struct ProxySettings {
    /// Proxy URL, e.g. `http://proxy.example.org:8080`.
    pub url: String,
    /// User name for basic proxy authentication.
    pub login: Option<String>,
    /// Password for basic proxy authentication. Ignored without a login.
    pub password: Option<String>,
}
