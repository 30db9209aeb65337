//! AssessmentWizard - the stateful rating flow.
//!
//! Two independent gates guard forward movement:
//!
//! - `next()` from a rating page requires *that page's* area to be complete.
//! - Jumping to the Focus or Results stage via the step indicator requires
//!   *every* area to be complete.
//!
//! Jumping straight to any rating page (page dots) and going back are never
//! gated. Rejected actions return an error and leave the wizard untouched.

use serde::Serialize;
use thiserror::Error;

use crate::domain::assessment::{AssessmentSnapshot, PreviousAssessment, ScoreStore};
use crate::domain::foundation::{Score, StateMachine, Timestamp, ValidationError};
use crate::domain::life_area::{LifeArea, CATALOG_SIZE};

use super::step::{WizardStage, WizardStep, LAST_RATING_PAGE, RATING_PAGE_COUNT};

/// Why a wizard action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Rate both satisfaction and importance for {area} before continuing")]
    PageIncomplete { area: LifeArea },

    #[error("All areas must be rated first ({missing} remaining)")]
    ScoresIncomplete { missing: usize },

    #[error("Already on the first page")]
    AtFirstPage,

    #[error("Already at results")]
    AtResults,

    #[error("Rating page {page} does not exist")]
    PageOutOfRange { page: usize },

    #[error("Retake is only available from results")]
    NotAtResults,

    #[error("Cannot change {what} while on {step}")]
    ReadOnly { what: &'static str, step: WizardStep },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error(transparent)]
    InvalidScore(#[from] ValidationError),
}

/// Persistence state of the finalized results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaveStatus {
    Unsaved,
    Saved { at: Timestamp },
    /// Retryable; local data is kept.
    Failed { reason: String },
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved { .. })
    }
}

/// How many areas are fully rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardProgress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

/// One user's pass through the assessment. Volatile: nothing here
/// survives a reload until the results are saved.
#[derive(Debug, Clone)]
pub struct AssessmentWizard {
    step: WizardStep,
    last_page: usize,
    scores: ScoreStore,
    previous: Option<PreviousAssessment>,
    result: Option<AssessmentSnapshot>,
    save_status: SaveStatus,
}

impl Default for AssessmentWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::START,
            last_page: 0,
            scores: ScoreStore::new(),
            previous: None,
            result: None,
            save_status: SaveStatus::Unsaved,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn stage(&self) -> WizardStage {
        self.step.stage()
    }

    /// Area on the current rating page.
    pub fn current_area(&self) -> Option<LifeArea> {
        self.step.area()
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    /// The previous assessment, once (and if) it has loaded.
    pub fn previous(&self) -> Option<&PreviousAssessment> {
        self.previous.as_ref()
    }

    /// The finalized snapshot; present while on (or after leaving) Results
    /// until the next edit.
    pub fn snapshot(&self) -> Option<&AssessmentSnapshot> {
        self.result.as_ref()
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    pub fn progress(&self) -> WizardProgress {
        let completed = self.scores.complete_count();
        WizardProgress {
            completed,
            total: CATALOG_SIZE,
            percent: ((completed * 100) / CATALOG_SIZE) as u8,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Guards
    // ───────────────────────────────────────────────────────────────

    /// Sequential gate: may `next()` be taken from here?
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::RatingPage(p) => LifeArea::at(p).is_some_and(|a| self.scores.is_complete(a)),
            WizardStep::FocusSelection => true,
            WizardStep::Results => false,
        }
    }

    pub fn can_go_back(&self) -> bool {
        !matches!(self.step, WizardStep::RatingPage(0))
    }

    /// Step-indicator gate: Focus and Results need every area rated.
    pub fn can_jump_to_stage(&self, stage: WizardStage) -> bool {
        match stage {
            WizardStage::Rating => true,
            WizardStage::Focus | WizardStage::Results => self.scores.all_complete(),
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Edits
    // ───────────────────────────────────────────────────────────────

    /// Rates satisfaction for an area. Not allowed on Results.
    pub fn set_satisfaction(&mut self, area: LifeArea, value: u8) -> Result<Score, WizardError> {
        self.ensure_editable("ratings")?;
        let score = self.scores.set_satisfaction(area, value)?;
        self.invalidate_result();
        Ok(score)
    }

    /// Rates importance for an area. Not allowed on Results.
    pub fn set_importance(&mut self, area: LifeArea, value: u8) -> Result<Score, WizardError> {
        self.ensure_editable("ratings")?;
        let score = self.scores.set_importance(area, value)?;
        self.invalidate_result();
        Ok(score)
    }

    /// Toggles a focus area. Only allowed on the focus step.
    pub fn toggle_focus(&mut self, area: LifeArea) -> Result<bool, WizardError> {
        if self.step != WizardStep::FocusSelection {
            return Err(WizardError::ReadOnly {
                what: "focus areas",
                step: self.step,
            });
        }
        let selected = self.scores.toggle_focus(area);
        self.invalidate_result();
        Ok(selected)
    }

    /// Attaches the previous assessment whenever its load completes.
    pub fn attach_previous(&mut self, previous: PreviousAssessment) {
        self.previous = Some(previous);
    }

    // ───────────────────────────────────────────────────────────────
    // Navigation
    // ───────────────────────────────────────────────────────────────

    /// Sequential forward move.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::RatingPage(p) => {
                let area = LifeArea::at(p).ok_or(WizardError::PageOutOfRange { page: p })?;
                if !self.scores.is_complete(area) {
                    tracing::debug!(area = area.key(), "next() refused: page incomplete");
                    return Err(WizardError::PageIncomplete { area });
                }
                if p < LAST_RATING_PAGE {
                    WizardStep::RatingPage(p + 1)
                } else {
                    WizardStep::FocusSelection
                }
            }
            WizardStep::FocusSelection => WizardStep::Results,
            WizardStep::Results => return Err(WizardError::AtResults),
        };
        self.move_to(target)
    }

    /// Backward move; never validated and never clears data.
    pub fn back(&mut self) -> Result<WizardStep, WizardError> {
        let target = match self.step {
            WizardStep::RatingPage(0) => return Err(WizardError::AtFirstPage),
            WizardStep::RatingPage(p) => WizardStep::RatingPage(p - 1),
            WizardStep::FocusSelection => WizardStep::RatingPage(self.last_page),
            WizardStep::Results => WizardStep::FocusSelection,
        };
        self.move_to(target)
    }

    /// Page-dot jump to any rating page, regardless of completeness.
    pub fn jump_to_page(&mut self, page: usize) -> Result<WizardStep, WizardError> {
        if page >= RATING_PAGE_COUNT {
            return Err(WizardError::PageOutOfRange { page });
        }
        let target = WizardStep::RatingPage(page);
        if target == self.step {
            return Ok(self.step);
        }
        self.move_to(target)
    }

    /// Step-indicator jump. Focus and Results require all scores set.
    pub fn jump_to_stage(&mut self, stage: WizardStage) -> Result<WizardStep, WizardError> {
        if !self.can_jump_to_stage(stage) {
            let missing = CATALOG_SIZE - self.scores.complete_count();
            tracing::debug!(?stage, missing, "stage jump refused");
            return Err(WizardError::ScoresIncomplete { missing });
        }
        let target = match stage {
            WizardStage::Rating => WizardStep::RatingPage(self.last_page),
            WizardStage::Focus => WizardStep::FocusSelection,
            WizardStage::Results => WizardStep::Results,
        };
        if target == self.step {
            return Ok(self.step);
        }
        self.move_to(target)
    }

    /// Starts over from Results: clears ratings, focus and save status.
    /// The previous assessment is kept for comparison.
    pub fn retake(&mut self) -> Result<WizardStep, WizardError> {
        if self.step != WizardStep::Results {
            return Err(WizardError::NotAtResults);
        }
        let step = self.move_to(WizardStep::START)?;
        self.scores.clear();
        self.result = None;
        self.save_status = SaveStatus::Unsaved;
        tracing::debug!("assessment reset for retake");
        Ok(step)
    }

    // ───────────────────────────────────────────────────────────────
    // Persistence outcome
    // ───────────────────────────────────────────────────────────────

    /// Records a successful save, adopting the store-assigned timestamp.
    ///
    /// Returns false if there is no finalized snapshot any more (the user
    /// edited while the save was in flight); the status is left alone.
    pub fn mark_saved(&mut self, created_at: Timestamp) -> bool {
        match self.result.as_mut() {
            Some(snapshot) => {
                *snapshot = snapshot.with_created_at(created_at);
                self.save_status = SaveStatus::Saved { at: created_at };
                true
            }
            None => false,
        }
    }

    /// Records a failed save. Results and ratings stay as they are.
    pub fn mark_save_failed(&mut self, reason: impl Into<String>) {
        self.save_status = SaveStatus::Failed {
            reason: reason.into(),
        };
    }

    // ───────────────────────────────────────────────────────────────
    // Internals
    // ───────────────────────────────────────────────────────────────

    fn move_to(&mut self, target: WizardStep) -> Result<WizardStep, WizardError> {
        let from = self.step;
        self.step = from
            .transition_to(target)
            .map_err(|e| WizardError::InvalidTransition(e.to_string()))?;

        if let WizardStep::RatingPage(p) = self.step {
            self.last_page = p;
        }
        if self.step == WizardStep::Results && self.result.is_none() {
            self.result = Some(self.scores.finalize(Timestamp::now()));
        }

        tracing::debug!(from = %from, to = %self.step, "wizard step changed");
        Ok(self.step)
    }

    fn ensure_editable(&self, what: &'static str) -> Result<(), WizardError> {
        if self.step == WizardStep::Results {
            return Err(WizardError::ReadOnly {
                what,
                step: self.step,
            });
        }
        Ok(())
    }

    fn invalidate_result(&mut self) {
        self.result = None;
        self.save_status = SaveStatus::Unsaved;
    }
}
