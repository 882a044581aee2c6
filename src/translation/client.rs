use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::backend::{Backend, ClientConfig, Endpoint};
use super::language::{AUTO_DETECT, LanguageEntry, languages_by_name};
use super::selector::{MirrorSelector, RandomSelector};
use crate::error::{MozhiError, Result};

/// Request timeout applied unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source: String,
    pub target: String,
    pub text: String,
}

impl TranslationRequest {
    /// Validates and normalises a request. An empty source means auto-detect.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let mut source = source.into();
        let target = target.into();
        let text = text.into();

        if source.trim().is_empty() {
            source = AUTO_DETECT.to_string();
        }
        if target.trim().is_empty() {
            return Err(MozhiError::Config(
                "Target language must not be empty".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(MozhiError::Config("Input text is empty".to_string()));
        }

        Ok(Self {
            source,
            target,
            text,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translated-text")]
    translated_text: String,
}

pub struct TranslationClient {
    client: Client,
    backend: Backend,
}

impl TranslationClient {
    /// Client with random mirror selection and the default timeout.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> TranslationClientBuilder {
        TranslationClientBuilder {
            config,
            selector: Box::new(RandomSelector),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        self.backend.config()
    }

    /// Fetches the source languages supported by the configured engine.
    pub async fn list_languages(&self) -> Result<BTreeMap<String, String>> {
        let url = self.backend.url(Endpoint::SourceLanguages, &[]);
        let entries: Vec<LanguageEntry> = self.get_json(url).await?;
        Ok(languages_by_name(entries))
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let url = self.backend.url(
            Endpoint::Translate,
            &[
                ("from", request.source.as_str()),
                ("to", request.target.as_str()),
                ("text", request.text.as_str()),
            ],
        );
        let response: TranslateResponse = self.get_json(url).await?;
        Ok(response.translated_text)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(%url, "sending request");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| request_error(&url, None, e))?;

        let status = response.status();
        debug!(%status, "received response");

        if status != StatusCode::OK {
            return Err(MozhiError::Request {
                url: redact(&url),
                status: Some(status.as_u16()),
                message: format!("mirror responded with status {status}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| request_error(&url, Some(status), e))?;

        serde_json::from_str(&body).map_err(|reason| MozhiError::Decode {
            url: redact(&url),
            reason,
        })
    }
}

/// Mirror and endpoint only. The query carries the user's text.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}

fn request_error(url: &Url, status: Option<StatusCode>, err: reqwest::Error) -> MozhiError {
    let message = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        let err = err.without_url();
        match std::error::Error::source(&err) {
            Some(cause) => format!("{err}: {cause}"),
            None => err.to_string(),
        }
    };

    MozhiError::Request {
        url: redact(url),
        status: status.map(|s| s.as_u16()),
        message,
    }
}

pub struct TranslationClientBuilder {
    config: ClientConfig,
    selector: Box<dyn MirrorSelector>,
    timeout: Option<Duration>,
}

impl TranslationClientBuilder {
    #[must_use]
    pub fn selector(mut self, selector: Box<dyn MirrorSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// `None` lets a request wait indefinitely.
    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TranslationClient> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            MozhiError::InvalidConfig(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(TranslationClient {
            client,
            backend: Backend::new(self.config, self.selector),
        })
    }
}
