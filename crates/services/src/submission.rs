//! Answer submissions as cancellable futures keyed by question id.

use futures::FutureExt;
use futures::future::{AbortHandle, Aborted, BoxFuture, abortable};
use quiz_core::model::{AnswerReply, AnswerSubmission, QuestionId, UpdatePayload};

use crate::api::OnChange;
use crate::error::ApiError;

/// How an in-flight submission ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Resolved(AnswerReply),
    /// Aborted because the question it belongs to went away.
    Cancelled,
    /// The transport gave up; the reply will never arrive.
    Failed(ApiError),
}

/// Sends answers through the page's update channel.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerSubmitter {
    on_change: OnChange,
}

impl AnswerSubmitter {
    #[must_use]
    pub fn new(on_change: OnChange) -> Self {
        Self { on_change }
    }

    /// Start sending `submission`. Nothing goes out until the returned
    /// future is polled.
    #[must_use]
    pub fn submit(&self, submission: AnswerSubmission) -> PendingAnswer {
        let on_change = self.on_change.clone();
        let question_id = submission.question_id;
        let request = async move {
            on_change
                .send(UpdatePayload::Answer(submission))
                .await
                .map(|response| response.into_reply(question_id))
        };
        let (request, handle) = abortable(request);
        PendingAnswer {
            question_id,
            handle,
            request: request.boxed(),
        }
    }
}

/// A submission in flight for one question.
pub struct PendingAnswer {
    question_id: QuestionId,
    handle: AbortHandle,
    request: BoxFuture<'static, Result<Result<AnswerReply, ApiError>, Aborted>>,
}

impl PendingAnswer {
    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    /// Handle that cancels this submission from elsewhere.
    #[must_use]
    pub fn abort_handle(&self) -> AbortHandle {
        self.handle.clone()
    }

    pub async fn outcome(self) -> SubmissionOutcome {
        let question_id = self.question_id;
        match self.request.await {
            Ok(Ok(reply)) => SubmissionOutcome::Resolved(reply),
            Ok(Err(err)) => {
                tracing::warn!(%question_id, error = %err, "answer submission failed; waiting without retry");
                SubmissionOutcome::Failed(err)
            }
            Err(Aborted) => {
                tracing::debug!(%question_id, "answer submission cancelled");
                SubmissionOutcome::Cancelled
            }
        }
    }
}

impl std::fmt::Debug for PendingAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAnswer")
            .field("question_id", &self.question_id)
            .finish_non_exhaustive()
    }
}
