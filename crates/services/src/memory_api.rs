use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use quiz_core::model::{SessionResult, Template, UpdatePayload, UpdateResponse};

use crate::api::SessionApi;
use crate::error::ApiError;

/// How the in-memory router answers the next update for a location.
#[derive(Debug)]
pub enum ScriptedReply {
    Respond(UpdateResponse),
    /// Transport failure.
    Fail,
    /// Never replies.
    Hang,
    /// Replies with whatever the paired sender delivers, whenever it does.
    Deferred(oneshot::Receiver<UpdateResponse>),
}

/// An update the in-memory router received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentUpdate {
    pub location: String,
    pub payload: UpdatePayload,
}

#[derive(Debug, Default)]
struct Script {
    results: HashMap<String, SessionResult>,
    replies: HashMap<String, VecDeque<ScriptedReply>>,
    sent: Vec<SentUpdate>,
}

/// Scripted `SessionApi` for tests and offline runs.
///
/// Unknown locations resolve to the `NotFound` template, as the real router
/// does.
#[derive(Clone, Debug, Default)]
pub struct InMemorySessionApi {
    script: Arc<Mutex<Script>>,
}

impl InMemorySessionApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the result for `location`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unavailable` if the script lock is poisoned.
    pub fn insert_result(&self, location: &str, result: SessionResult) -> Result<(), ApiError> {
        let mut guard = self
            .script
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        guard.results.insert(normalize(location), result);
        Ok(())
    }

    /// Queue the reply for the next update sent from `location`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unavailable` if the script lock is poisoned.
    pub fn push_reply(&self, location: &str, reply: ScriptedReply) -> Result<(), ApiError> {
        let mut guard = self
            .script
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        guard
            .replies
            .entry(normalize(location))
            .or_default()
            .push_back(reply);
        Ok(())
    }

    /// Every update received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unavailable` if the script lock is poisoned.
    pub fn sent(&self) -> Result<Vec<SentUpdate>, ApiError> {
        let guard = self
            .script
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        Ok(guard.sent.clone())
    }
}

// Locations compare without their trailing slash.
fn normalize(location: &str) -> String {
    let (path, query) = quiz_core::path::split_query(location);
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    format!("{path}{query}")
}

#[async_trait]
impl SessionApi for InMemorySessionApi {
    async fn resolve(&self, location: &str) -> Result<SessionResult, ApiError> {
        let guard = self
            .script
            .lock()
            .map_err(|e| ApiError::Unavailable(e.to_string()))?;
        Ok(guard
            .results
            .get(&normalize(location))
            .cloned()
            .unwrap_or_else(|| SessionResult::new(Template::NotFound)))
    }

    async fn on_change(
        &self,
        location: &str,
        payload: &UpdatePayload,
    ) -> Result<UpdateResponse, ApiError> {
        let key = normalize(location);
        let reply = {
            let mut guard = self
                .script
                .lock()
                .map_err(|e| ApiError::Unavailable(e.to_string()))?;
            guard.sent.push(SentUpdate {
                location: location.to_string(),
                payload: payload.clone(),
            });
            guard.replies.get_mut(&key).and_then(VecDeque::pop_front)
        };

        match reply {
            Some(ScriptedReply::Respond(response)) => Ok(response),
            Some(ScriptedReply::Fail) => Err(ApiError::Unavailable(key)),
            Some(ScriptedReply::Hang) => futures::future::pending().await,
            Some(ScriptedReply::Deferred(receiver)) => match receiver.await {
                Ok(response) => Ok(response),
                // Sender dropped: the reply is never coming.
                Err(_) => futures::future::pending().await,
            },
            None => Err(ApiError::NoReply(key)),
        }
    }
}
