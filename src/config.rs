//! Process-wide settings for native builds.

use std::sync::OnceLock;
use url::{ParseError, Url};

/// Environment variable holding the base URL for relative network paths.
pub const BASE_URL_VAR: &str = "RESOURCES_BASE_URL";

/// Settings for the native [`HttpReader`](crate::HttpReader).
///
/// A browser resolves relative request paths against the page it is serving. Native processes have
/// no such origin, so one can be supplied here.
#[derive(Clone, Default, Debug)]
pub struct Config {
    base_url: Option<Url>,
}

impl Config {
    pub fn new(base_url: Option<Url>) -> Self {
        Self { base_url }
    }

    /// Reads settings from the process environment.
    ///
    /// An unparseable `RESOURCES_BASE_URL` is logged and ignored.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_VAR)
            .ok()
            .and_then(|raw| match Url::parse(&raw) {
                Ok(url) => Some(url),
                Err(e) => {
                    log::warn!("ignoring {}={:?}: {}", BASE_URL_VAR, raw, e);
                    None
                }
            });
        Self { base_url }
    }

    /// The settings shared by every reader that wasn't given its own.
    ///
    /// Read from the environment on first use.
    pub fn global() -> &'static Config {
        static GLOBAL: OnceLock<Config> = OnceLock::new();
        GLOBAL.get_or_init(Self::from_env)
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Turns a resource path into a URL to request.
    pub fn resolve(&self, path: &str) -> Result<Url, ParseError> {
        match (Url::parse(path), &self.base_url) {
            (Err(ParseError::RelativeUrlWithoutBase), Some(base)) => base.join(path),
            (res, _) => res,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative() {
        let config = Config::new(Some(Url::parse("http://localhost:8080/assets/").unwrap()));
        assert_eq!(
            config.resolve("fonts/a.ttf").unwrap().as_str(),
            "http://localhost:8080/assets/fonts/a.ttf"
        );
        assert_eq!(
            config.resolve("/root.txt").unwrap().as_str(),
            "http://localhost:8080/root.txt"
        );
    }

    #[test]
    fn resolve_absolute() {
        let config = Config::new(Some(Url::parse("http://localhost:8080/").unwrap()));
        assert_eq!(
            config.resolve("https://example.com/x").unwrap().as_str(),
            "https://example.com/x"
        );
    }

    #[test]
    fn resolve_without_base() {
        assert_eq!(
            Config::default().resolve("a.txt"),
            Err(ParseError::RelativeUrlWithoutBase)
        );
    }
}
