use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::{SessionResult, UpdatePayload, UpdateResponse};

use crate::error::ApiError;

/// Contract of the remote router.
///
/// `resolve` turns a location into the session result to display;
/// `on_change` is the update channel every page writes through.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Resolve a location (path plus optional query) to its session result.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the router cannot be reached or replies with
    /// something that is not a session result.
    async fn resolve(&self, location: &str) -> Result<SessionResult, ApiError>;

    /// Send an update for the page at `location`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport or decode failures.
    async fn on_change(
        &self,
        location: &str,
        payload: &UpdatePayload,
    ) -> Result<UpdateResponse, ApiError>;
}

/// The single update channel handed to every page of one location.
#[derive(Clone)]
pub struct OnChange {
    api: Arc<dyn SessionApi>,
    location: String,
}

impl OnChange {
    #[must_use]
    pub fn new(api: Arc<dyn SessionApi>, location: impl Into<String>) -> Self {
        Self {
            api,
            location: location.into(),
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Send `payload` and wait for the server's reply.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the update never produced a reply.
    pub async fn send(&self, payload: UpdatePayload) -> Result<UpdateResponse, ApiError> {
        tracing::debug!(location = %self.location, kind = payload.kind(), "sending update");
        let response = self.api.on_change(&self.location, &payload).await;
        if let Err(err) = &response {
            tracing::warn!(location = %self.location, kind = payload.kind(), error = %err, "update failed");
        }
        response
    }
}

impl PartialEq for OnChange {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.api), Arc::as_ptr(&other.api))
            && self.location == other.location
    }
}

impl fmt::Debug for OnChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnChange")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}
