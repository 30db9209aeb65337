//! SaveAssessment - Command handler for persisting a finalized assessment.

use std::sync::Arc;

use crate::domain::assessment::AssessmentSnapshot;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// Command to store a finalized snapshot.
#[derive(Debug, Clone)]
pub struct SaveAssessmentCommand {
    pub user_id: Option<UserId>,
    pub snapshot: AssessmentSnapshot,
}

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAssessmentResult {
    pub assessment_id: AssessmentId,
    /// Store-assigned creation time.
    pub created_at: Timestamp,
}

/// Handler for saving assessments.
#[derive(Clone)]
pub struct SaveAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl SaveAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveAssessmentCommand) -> Result<SaveAssessmentResult, DomainError> {
        // 1. Only identified users have somewhere to save to
        let user_id = cmd.user_id.ok_or_else(|| {
            DomainError::new(ErrorCode::Unauthorized, "Sign in to save your assessment")
        })?;

        // 2. Append a new record
        let saved = match self.repository.save(&user_id, &cmd.snapshot).await {
            Ok(saved) => saved,
            Err(error) => {
                tracing::warn!(user = %user_id, %error, "assessment save failed");
                return Err(error);
            }
        };

        tracing::info!(
            user = %user_id,
            assessment_id = %saved.id,
            focus_areas = cmd.snapshot.focus_areas().len(),
            "assessment saved"
        );

        Ok(SaveAssessmentResult {
            assessment_id: saved.id,
            created_at: saved.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::assessment::{PreviousAssessment, ScoreStore};
    use crate::domain::life_area::LifeArea;
    use crate::ports::SavedAssessment;
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl AssessmentRepository for FailingRepository {
        async fn load_latest(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<PreviousAssessment>, DomainError> {
            Ok(None)
        }

        async fn save(
            &self,
            _user_id: &UserId,
            _snapshot: &AssessmentSnapshot,
        ) -> Result<SavedAssessment, DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "connection reset"))
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test@example.com").unwrap()
    }

    fn test_snapshot() -> AssessmentSnapshot {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Growth, 7).unwrap();
        store.toggle_focus(LifeArea::Growth);
        store.finalize(Timestamp::from_unix_secs(0).unwrap())
    }

    #[tokio::test]
    async fn saves_for_identified_user() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let handler = SaveAssessmentHandler::new(repo.clone());

        let result = handler
            .handle(SaveAssessmentCommand {
                user_id: Some(test_user_id()),
                snapshot: test_snapshot(),
            })
            .await
            .unwrap();

        assert_eq!(repo.count_for(&test_user_id()).await, 1);
        let stored = repo.load_latest(&test_user_id()).await.unwrap().unwrap();
        assert_eq!(stored.created_at(), result.created_at);
        assert_eq!(stored.focus_areas(), &[LifeArea::Growth]);
    }

    #[tokio::test]
    async fn anonymous_save_is_unauthorized() {
        let handler = SaveAssessmentHandler::new(Arc::new(InMemoryAssessmentRepository::new()));

        let err = handler
            .handle(SaveAssessmentCommand {
                user_id: None,
                snapshot: test_snapshot(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn repository_failure_is_returned() {
        let handler = SaveAssessmentHandler::new(Arc::new(FailingRepository));

        let err = handler
            .handle(SaveAssessmentCommand {
                user_id: Some(test_user_id()),
                snapshot: test_snapshot(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
