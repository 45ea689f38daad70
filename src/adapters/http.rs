use crate::config::ClientConfig;
use crate::core::{RawResponse, ResponseBody, Transport};
use crate::utils::error::{Error, Result};
use crate::utils::validation::Validate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&reqwest::Method::from(*self), f)
    }
}

/// Parameters for one call through [`HttpTransport`]. `path` is resolved
/// against the configured base URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                Error::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| Error::InvalidConfigValueError {
                field: format!("headers.{}", key),
                value: value.clone(),
                reason: e.to_string(),
            })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: Url::parse(&config.base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `path` is always appended below the base path, never replacing it.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        Ok(base.join(path.trim_start_matches('/'))?)
    }
}

impl Transport<HttpRequest> for HttpTransport {
    type Response = HttpResponse;

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = self.url_for(&request.path)?;
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = self.client.request(request.method.into(), url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let inner = builder.send().await?;
        Ok(HttpResponse { inner })
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    inner: reqwest::Response,
}

impl RawResponse for HttpResponse {
    fn ok(&self) -> bool {
        self.inner.status().is_success()
    }

    fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    async fn body(self) -> Result<ResponseBody> {
        let bytes = self.inner.bytes().await?;
        // Empty bodies are common on error statuses; treat them as an empty envelope.
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ResponseBody::default());
        }
        serde_json::from_slice(&bytes).map_err(|e| Error::DecodeError {
            message: format!("response body is not a JSON envelope: {}", e),
        })
    }
}
