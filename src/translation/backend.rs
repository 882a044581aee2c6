//! Mirror list and request URL construction.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;
use url::Url;

use super::selector::MirrorSelector;
use crate::error::{MozhiError, Result};

/// Public Mozhi mirrors used when nothing else is configured.
pub const DEFAULT_MIRRORS: &[&str] = &[
    "https://translate.projectsegfau.lt",
    "https://mozhi.aryak.me",
];

/// Engine used when nothing else is configured.
pub const DEFAULT_ENGINE: &str = "google";

/// API endpoints exposed by every mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SourceLanguages,
    Translate,
}

impl Endpoint {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceLanguages => "source_languages",
            Self::Translate => "translate",
        }
    }

    fn path(self) -> String {
        format!("/api/{}", self.as_str())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated mirror list plus the engine sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    mirrors: Vec<Url>,
    engine: String,
}

impl ClientConfig {
    /// Parses every mirror up front so no request is ever built from a bad URL.
    pub fn new<S: AsRef<str>>(mirrors: &[S], engine: impl Into<String>) -> Result<Self> {
        if mirrors.is_empty() {
            return Err(MozhiError::InvalidConfig(
                "at least one mirror URL is required".to_string(),
            ));
        }

        let engine = engine.into();
        if engine.trim().is_empty() {
            return Err(MozhiError::InvalidConfig(
                "engine must not be empty".to_string(),
            ));
        }

        let mirrors = mirrors
            .iter()
            .map(|raw| parse_mirror(raw.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { mirrors, engine })
    }

    pub fn mirrors(&self) -> &[Url] {
        &self.mirrors
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }
}

fn parse_mirror(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| MozhiError::InvalidConfig(format!("mirror '{raw}' is not a valid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(MozhiError::InvalidConfig(format!(
            "mirror '{raw}' must be an absolute http(s) URL"
        )));
    }

    Ok(url)
}

/// Builds request URLs against one of the configured mirrors.
pub struct Backend {
    config: ClientConfig,
    selector: Box<dyn MirrorSelector>,
}

impl Backend {
    pub fn new(config: ClientConfig, selector: Box<dyn MirrorSelector>) -> Self {
        Self { config, selector }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Composes `<mirror>/api/<endpoint>?engine=..&<params>` on a freshly selected mirror.
    ///
    /// Query pairs already present on the mirror URL are kept; `engine` is set
    /// from the config and caller parameters win on any key collision. Keys are
    /// serialized in sorted order.
    pub fn url(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> Url {
        let mirrors = &self.config.mirrors;
        let index = self.selector.select(mirrors.len()) % mirrors.len();
        let mut url = mirrors[index].clone();

        let mut query: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        query.insert("engine".to_string(), self.config.engine.clone());
        for (key, value) in params {
            query.insert((*key).to_string(), (*value).to_string());
        }

        url.set_path(&endpoint.path());
        url.query_pairs_mut().clear().extend_pairs(&query);

        debug!(mirror = %mirrors[index], %endpoint, "selected mirror");
        url
    }
}
