//! WizardStep - positions in the assessment flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;
use crate::domain::life_area::{LifeArea, CATALOG_SIZE};

/// One rating page per catalog area.
pub const RATING_PAGE_COUNT: usize = CATALOG_SIZE;

/// Index of the last rating page.
pub const LAST_RATING_PAGE: usize = RATING_PAGE_COUNT - 1;

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", content = "page", rename_all = "snake_case")]
pub enum WizardStep {
    /// Rating page for the area at this catalog index (0..=7).
    RatingPage(usize),
    FocusSelection,
    Results,
}

/// The three top-level stages shown by the step indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Rating,
    Focus,
    Results,
}

impl WizardStage {
    /// 1-based number shown on the indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStage::Rating => 1,
            WizardStage::Focus => 2,
            WizardStage::Results => 3,
        }
    }
}

impl WizardStep {
    /// The first step of a fresh run.
    pub const START: WizardStep = WizardStep::RatingPage(0);

    /// Stage this step belongs to.
    pub fn stage(&self) -> WizardStage {
        match self {
            WizardStep::RatingPage(_) => WizardStage::Rating,
            WizardStep::FocusSelection => WizardStage::Focus,
            WizardStep::Results => WizardStage::Results,
        }
    }

    /// Area rated on this step, if it is a rating page.
    pub fn area(&self) -> Option<LifeArea> {
        match self {
            WizardStep::RatingPage(p) => LifeArea::at(*p),
            _ => None,
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            WizardStep::RatingPage(p) => *p < RATING_PAGE_COUNT,
            _ => true,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardStep::RatingPage(p) => write!(f, "rating page {}/{}", p + 1, RATING_PAGE_COUNT),
            WizardStep::FocusSelection => write!(f, "focus selection"),
            WizardStep::Results => write!(f, "results"),
        }
    }
}

/// Structural edges only. Between back, next, page dots, the stage
/// indicator and retake, every step can reach every other one; the data
/// gates (page complete, all scores set) are enforced by `AssessmentWizard`.
impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.is_valid() && target.is_valid() && self != target
    }

    fn valid_transitions(&self) -> Vec<Self> {
        if !self.is_valid() {
            return vec![];
        }
        (0..RATING_PAGE_COUNT)
            .map(WizardStep::RatingPage)
            .chain([WizardStep::FocusSelection, WizardStep::Results])
            .filter(|target| target != self)
            .collect()
    }
}
