use std::fs;

use crate::config::Config;
use crate::error::ResolveError;

/// Fetches one schema document as XML text.
///
/// The resolver core is generic over this seam. Tests and embedders can
/// supply their own source of documents; everything else goes through
/// [`NetworkLoader`].
pub trait DocumentLoader {
    fn load_document(&self, location: &str) -> Result<String, ResolveError>;
}

/// Loads documents from http(s) URLs or the local filesystem.
///
/// Remote fetches share one blocking client built from the [`Config`] proxy
/// settings. Any location that is not an http(s) URL is treated as a
/// filesystem path; a `file://` prefix is accepted and stripped.
#[derive(Debug)]
pub struct NetworkLoader {
    client: reqwest::blocking::Client,
}

impl NetworkLoader {
    pub fn new(config: &Config) -> Result<Self, ResolveError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(proxy) = &config.proxy {
            let mut applied =
                reqwest::Proxy::all(&proxy.url).map_err(|source| ResolveError::InvalidProxy {
                    url: proxy.url.clone(),
                    source,
                })?;
            if let Some(login) = &proxy.login {
                applied = applied.basic_auth(login, proxy.password.as_deref().unwrap_or(""));
            }
            builder = builder.proxy(applied);
        }
        let client = builder.build().map_err(ResolveError::Client)?;
        Ok(NetworkLoader { client })
    }
}

impl DocumentLoader for NetworkLoader {
    fn load_document(&self, location: &str) -> Result<String, ResolveError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let load_error = |source: reqwest::Error| ResolveError::Load {
                location: location.to_string(),
                source: Box::new(source),
            };
            let response = self.client.get(location).send().map_err(load_error)?;
            let response = response.error_for_status().map_err(load_error)?;
            response.text().map_err(load_error)
        } else {
            let path = location.strip_prefix("file://").unwrap_or(location);
            fs::read_to_string(path).map_err(|source| ResolveError::Load {
                location: location.to_string(),
                source: Box::new(source),
            })
        }
    }
}
