use super::error::ApiError;
use async_trait::async_trait;
use cinelog_model::{Entry, EntryPayload, ImdbId};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Operations the film pages perform against the backend
#[async_trait]
pub trait FilmsApi: Send + Sync {
    /// Remove a film from the collection (`DELETE /films/{id}`)
    async fn delete_film(&self, id: &ImdbId) -> Result<(), ApiError>;

    /// Ask the backend to re-fetch a film's metadata (`PUT /films/{id}`)
    async fn refresh_film(&self, id: &ImdbId) -> Result<(), ApiError>;

    /// Replace the film's feedback entry and return the stored copy
    async fn update_entry(
        &self,
        id: &ImdbId,
        payload: &EntryPayload,
    ) -> Result<Entry, ApiError>;

    /// Delete the film's feedback entry
    async fn delete_entry(&self, id: &ImdbId) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Where the error message of a failed call comes from
#[derive(Clone, Copy)]
enum FailureMessage {
    /// Use the JSON body's `message` when present
    FromBody(&'static str),
    Fixed(&'static str),
}

/// reqwest-backed [`FilmsApi`]
#[derive(Clone)]
pub struct FilmsClient {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for FilmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilmsClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl FilmsClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client with the default request timeout
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url).map_err(|source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        // Keep any path prefix when joining endpoint paths
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        info!("[FilmsClient] Creating films client with base URL: {}", base);

        Ok(Self {
            client,
            base_url: base,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a backend path such as `/films/tt0133093` against the base URL
    pub fn build_url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| ApiError::InvalidUrl {
                url: path.to_string(),
                source,
            })
    }

    async fn send(
        &self,
        request: RequestBuilder,
        failure: FailureMessage,
    ) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match failure {
            FailureMessage::Fixed(message) => message.to_string(),
            FailureMessage::FromBody(fallback) => {
                let body = response.text().await.unwrap_or_default();
                serde_json::from_str::<ErrorBody>(&body)
                    .ok()
                    .and_then(|body| body.message)
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| fallback.to_string())
            }
        };
        warn!("[FilmsClient] Request failed with status {}: {}", status, message);
        Err(ApiError::Status { status, message })
    }
}

#[async_trait]
impl FilmsApi for FilmsClient {
    async fn delete_film(&self, id: &ImdbId) -> Result<(), ApiError> {
        let url = self.build_url(&id.film_path())?;
        self.send(
            self.client
                .delete(url)
                .header(CONTENT_TYPE, "application/json"),
            FailureMessage::FromBody("Delete failed"),
        )
        .await?;
        info!("[FilmsClient] Deleted film {}", id);
        Ok(())
    }

    async fn refresh_film(&self, id: &ImdbId) -> Result<(), ApiError> {
        let url = self.build_url(&id.film_path())?;
        self.send(
            self.client.put(url).json(&serde_json::json!({})),
            FailureMessage::Fixed("Failed to update film"),
        )
        .await?;
        info!("[FilmsClient] Refreshed film {}", id);
        Ok(())
    }

    async fn update_entry(
        &self,
        id: &ImdbId,
        payload: &EntryPayload,
    ) -> Result<Entry, ApiError> {
        let url = self.build_url(&id.entry_path())?;
        let response = self
            .send(
                self.client.put(url).json(payload),
                FailureMessage::Fixed("Failed to update the entry"),
            )
            .await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn delete_entry(&self, id: &ImdbId) -> Result<(), ApiError> {
        let url = self.build_url(&id.entry_path())?;
        self.send(
            self.client.delete(url),
            FailureMessage::Fixed("Failed to delete the entry"),
        )
        .await?;
        info!("[FilmsClient] Deleted entry of film {}", id);
        Ok(())
    }
}
