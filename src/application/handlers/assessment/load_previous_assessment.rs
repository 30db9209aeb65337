//! LoadPreviousAssessment - Query handler for the user's latest stored assessment.
//!
//! Best-effort: a failed load is logged and reported as "no previous
//! assessment" so comparison features fall back to single-series mode.

use std::sync::Arc;

use crate::domain::assessment::PreviousAssessment;
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

/// Query for the most recent assessment of a user.
#[derive(Debug, Clone)]
pub struct LoadPreviousAssessmentQuery {
    /// `None` for anonymous sessions, which never hit the store.
    pub user_id: Option<UserId>,
}

/// Handler for loading the previous assessment.
#[derive(Clone)]
pub struct LoadPreviousAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl LoadPreviousAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: LoadPreviousAssessmentQuery) -> Option<PreviousAssessment> {
        let user_id = query.user_id?;

        match self.repository.load_latest(&user_id).await {
            Ok(previous) => {
                tracing::debug!(user = %user_id, found = previous.is_some(), "previous assessment loaded");
                previous
            }
            Err(error) => {
                tracing::warn!(user = %user_id, %error, "previous assessment load failed; continuing without it");
                None
            }
        }
    }
}
