use std::env;

use async_trait::async_trait;
use quiz_core::model::{SessionResult, Template, UpdatePayload, UpdateResponse};
use quiz_core::path::split_query;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::api::SessionApi;
use crate::error::ApiError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct HttpApiConfig {
    pub base_url: String,
}

impl HttpApiConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("QUIZ_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self { base_url }
    }
}

/// `SessionApi` over HTTP: locations map to `{base}/api{path}`.
///
/// A cookie store keeps the server-side login across requests.
#[derive(Clone, Debug)]
pub struct HttpSessionApi {
    client: Client,
    base: Url,
}

impl HttpSessionApi {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` for an unparsable base url, or
    /// `ApiError::Http` when the client cannot be built.
    pub fn new(config: &HttpApiConfig) -> Result<Self, ApiError> {
        let mut raw = config.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw)?;
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self { client, base })
    }

    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the joined url is invalid.
    pub fn endpoint(&self, location: &str) -> Result<Url, ApiError> {
        let (path, query) = split_query(location);
        let path = path.trim_start_matches('/');
        let mut relative = format!("api/{path}");
        if !relative.ends_with('/') {
            relative.push('/');
        }
        relative.push_str(query);
        Ok(self.base.join(&relative)?)
    }
}

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn resolve(&self, location: &str) -> Result<SessionResult, ApiError> {
        let url = self.endpoint(location)?;
        tracing::debug!(%url, "resolving location");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)
                .unwrap_or_else(|_| SessionResult::new(Template::NotFound)));
        }
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn on_change(
        &self,
        location: &str,
        payload: &UpdatePayload,
    ) -> Result<UpdateResponse, ApiError> {
        let url = self.endpoint(location)?;
        let response = self.client.post(url).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(UpdateResponse::default());
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
