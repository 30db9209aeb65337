//! AssessmentSession - one user's pass through the wizard, wired to storage.
//!
//! The previous assessment loads on a spawned task and is picked up by
//! polling, so it may arrive at any point while the user is rating.
//! Scoring and geometry never wait on I/O.

use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::config::AppConfig;
use crate::domain::analysis::{RadarGeometry, DEFAULT_GRID_LEVELS};
use crate::domain::assessment::PreviousAssessment;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::life_area::DEFAULT_RESOURCES_BASE_URL;
use crate::domain::wizard::AssessmentWizard;
use crate::ports::AssessmentRepository;

use super::handlers::{
    LoadPreviousAssessmentHandler, LoadPreviousAssessmentQuery, SaveAssessmentCommand,
    SaveAssessmentHandler, SaveAssessmentResult,
};
use super::results::AssessmentResults;

type PreviousReceiver = oneshot::Receiver<Option<PreviousAssessment>>;

pub struct AssessmentSession {
    user_id: Option<UserId>,
    wizard: AssessmentWizard,
    load_handler: LoadPreviousAssessmentHandler,
    save_handler: SaveAssessmentHandler,
    geometry: RadarGeometry,
    grid_levels: Vec<f64>,
    resources_base_url: String,
    pending_previous: Option<PreviousReceiver>,
}

impl AssessmentSession {
    /// `user_id` is `None` for anonymous sessions: nothing is loaded and
    /// saves fail with `Unauthorized`.
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        user_id: Option<UserId>,
        geometry: RadarGeometry,
    ) -> Self {
        Self {
            user_id,
            wizard: AssessmentWizard::new(),
            load_handler: LoadPreviousAssessmentHandler::new(repository.clone()),
            save_handler: SaveAssessmentHandler::new(repository),
            geometry,
            grid_levels: DEFAULT_GRID_LEVELS.to_vec(),
            resources_base_url: DEFAULT_RESOURCES_BASE_URL.to_string(),
            pending_previous: None,
        }
    }

    /// Session laid out according to application configuration.
    pub fn configured(
        repository: Arc<dyn AssessmentRepository>,
        user_id: Option<UserId>,
        config: &AppConfig,
    ) -> Self {
        Self::new(repository, user_id, config.chart.geometry())
            .with_grid_levels(config.chart.grid_levels.clone())
            .with_resources_base_url(config.resources.base_url.clone())
    }

    pub fn with_grid_levels(mut self, levels: Vec<f64>) -> Self {
        self.grid_levels = levels;
        self
    }

    pub fn with_resources_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.resources_base_url = base_url.into();
        self
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn wizard(&self) -> &AssessmentWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut AssessmentWizard {
        &mut self.wizard
    }

    // ───────────────────────────────────────────────────────────────
    // Previous assessment
    // ───────────────────────────────────────────────────────────────

    /// Starts loading the previous assessment in the background.
    ///
    /// No-op for anonymous sessions or when a load is already running.
    /// Must be called from within a tokio runtime.
    pub fn begin_previous_load(&mut self) {
        if self.pending_previous.is_some() {
            return;
        }
        let Some(user_id) = self.user_id.clone() else {
            tracing::debug!("anonymous session; skipping previous assessment load");
            return;
        };

        let (tx, rx) = oneshot::channel();
        let handler = self.load_handler.clone();
        tokio::spawn(async move {
            let previous = handler
                .handle(LoadPreviousAssessmentQuery {
                    user_id: Some(user_id),
                })
                .await;
            // The session may have been dropped; nobody is listening then.
            let _ = tx.send(previous);
        });
        self.pending_previous = Some(rx);
    }

    pub fn is_loading_previous(&self) -> bool {
        self.pending_previous.is_some()
    }

    /// Attaches the previous assessment if the load has finished.
    ///
    /// Returns true once a previous assessment is available.
    pub fn poll_previous(&mut self) -> bool {
        if let Some(rx) = self.pending_previous.as_mut() {
            match rx.try_recv() {
                Ok(previous) => {
                    self.pending_previous = None;
                    self.attach(previous);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    self.pending_previous = None;
                }
            }
        }
        self.wizard.previous().is_some()
    }

    /// Waits for a running load to finish.
    ///
    /// Returns true once a previous assessment is available.
    pub async fn await_previous(&mut self) -> bool {
        if let Some(rx) = self.pending_previous.take() {
            if let Ok(previous) = rx.await {
                self.attach(previous);
            }
        }
        self.wizard.previous().is_some()
    }

    fn attach(&mut self, previous: Option<PreviousAssessment>) {
        if let Some(previous) = previous {
            self.wizard.attach_previous(previous);
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Results
    // ───────────────────────────────────────────────────────────────

    /// All derived views for the finalized snapshot.
    ///
    /// Picks up a previous assessment that finished loading in the meantime.
    pub fn results(&mut self) -> Result<AssessmentResults, DomainError> {
        self.poll_previous();
        let snapshot = self.wizard.snapshot().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Results are not available until every page is completed",
            )
        })?;

        let results = AssessmentResults::compute(
            snapshot,
            self.wizard.previous(),
            self.geometry,
            &self.grid_levels,
            &self.resources_base_url,
        )?;
        Ok(results)
    }

    /// Persists the finalized snapshot.
    ///
    /// On failure the wizard keeps its results with `SaveStatus::Failed`
    /// and the save may be retried.
    pub async fn save(&mut self) -> Result<SaveAssessmentResult, DomainError> {
        if self.wizard.save_status().is_saved() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Assessment is already saved",
            ));
        }
        let snapshot = self.wizard.snapshot().cloned().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Nothing to save before results are shown",
            )
        })?;

        let outcome = self
            .save_handler
            .handle(SaveAssessmentCommand {
                user_id: self.user_id.clone(),
                snapshot,
            })
            .await;

        match outcome {
            Ok(result) => {
                if !self.wizard.mark_saved(result.created_at) {
                    tracing::debug!("results changed during save; status left unsaved");
                }
                Ok(result)
            }
            Err(error) => {
                self.wizard.mark_save_failed(error.message.clone());
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::assessment::ScoreStore;
    use crate::domain::foundation::Timestamp;
    use crate::domain::life_area::LifeArea;
    use crate::domain::wizard::{SaveStatus, WizardStage, WizardStep};
    use crate::ports::AssessmentRecord;

    fn test_user_id() -> UserId {
        UserId::new("test@example.com").unwrap()
    }

    fn geometry() -> RadarGeometry {
        RadarGeometry::for_canvas(400.0, 150.0)
    }

    fn rate_everything(session: &mut AssessmentSession, satisfaction: u8, importance: u8) {
        let wizard = session.wizard_mut();
        for area in LifeArea::ALL {
            wizard.set_satisfaction(area, satisfaction).unwrap();
            wizard.set_importance(area, importance).unwrap();
        }
        wizard.jump_to_stage(WizardStage::Results).unwrap();
    }

    async fn seeded_repo(career: u8) -> Arc<InMemoryAssessmentRepository> {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Career, career).unwrap();
        let record = AssessmentRecord::from_snapshot(
            &test_user_id(),
            &store.finalize(Timestamp::now()),
            Timestamp::from_unix_secs(1_000).unwrap(),
        );
        repo.insert(record).await;
        repo
    }

    #[tokio::test]
    async fn previous_load_attaches_when_awaited() {
        let repo = seeded_repo(2).await;
        let mut session = AssessmentSession::new(repo, Some(test_user_id()), geometry());

        session.begin_previous_load();
        assert!(session.is_loading_previous());
        assert!(session.await_previous().await);

        let previous = session.wizard().previous().unwrap();
        assert_eq!(previous.satisfaction(LifeArea::Career).unwrap().value(), 2);
        assert!(!session.is_loading_previous());
    }

    #[tokio::test]
    async fn anonymous_session_never_loads() {
        let repo = seeded_repo(2).await;
        let mut session = AssessmentSession::new(repo, None, geometry());

        session.begin_previous_load();
        assert!(!session.is_loading_previous());
        assert!(!session.poll_previous());
    }

    #[tokio::test]
    async fn results_unavailable_before_finalizing() {
        let mut session =
            AssessmentSession::new(Arc::new(InMemoryAssessmentRepository::new()), None, geometry());

        let err = session.results().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[tokio::test]
    async fn save_marks_wizard_saved_with_store_timestamp() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let mut session = AssessmentSession::new(repo.clone(), Some(test_user_id()), geometry());
        rate_everything(&mut session, 6, 6);

        let result = session.save().await.unwrap();

        assert_eq!(
            session.wizard().save_status(),
            &SaveStatus::Saved {
                at: result.created_at
            }
        );
        assert_eq!(session.wizard().snapshot().unwrap().created_at(), result.created_at);
        assert_eq!(repo.count_for(&test_user_id()).await, 1);
    }

    #[tokio::test]
    async fn second_save_is_refused() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        let mut session = AssessmentSession::new(repo.clone(), Some(test_user_id()), geometry());
        rate_everything(&mut session, 6, 6);

        session.save().await.unwrap();
        assert!(session.save().await.is_err());
        assert_eq!(repo.count_for(&test_user_id()).await, 1);
    }

    #[tokio::test]
    async fn anonymous_save_fails_but_keeps_results() {
        let mut session =
            AssessmentSession::new(Arc::new(InMemoryAssessmentRepository::new()), None, geometry());
        rate_everything(&mut session, 3, 8);

        let err = session.save().await.unwrap_err();

        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(matches!(session.wizard().save_status(), SaveStatus::Failed { .. }));
        assert_eq!(session.wizard().step(), WizardStep::Results);
        assert!(session.results().is_ok());
    }

    #[tokio::test]
    async fn configured_session_uses_chart_settings() {
        let mut config = AppConfig::default();
        config.chart.grid_levels = vec![10.0];
        config.resources.base_url = "https://example.org/help".to_string();
        let mut session = AssessmentSession::configured(
            Arc::new(InMemoryAssessmentRepository::new()),
            None,
            &config,
        );
        rate_everything(&mut session, 3, 8);

        let results = session.results().unwrap();
        assert_eq!(results.chart.grid.len(), 1);
        assert!(results
            .resources
            .iter()
            .all(|r| r.url.starts_with("https://example.org/help/")));
    }
}
