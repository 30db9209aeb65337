//! AnswerSheet - a prepared set of answers that drives the wizard.
//!
//! ```yaml
//! user_id: alice@example.com
//! ratings:
//!   physical: { satisfaction: 6, importance: 9 }
//!   mental: { satisfaction: 4, importance: 8 }
//!   # ...one entry per area
//! focus: [mental, career]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::life_area::LifeArea;
use crate::domain::wizard::{AssessmentWizard, WizardError, WizardStep};

/// Both ratings for one area. Either may be left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct RatingAnswer {
    pub satisfaction: Option<u8>,
    pub importance: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnswerSheet {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub ratings: BTreeMap<LifeArea, RatingAnswer>,
    #[serde(default)]
    pub focus: Vec<LifeArea>,
}

impl AnswerSheet {
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        serde_yaml::from_str(yaml).map_err(|e| {
            DomainError::new(ErrorCode::SerializationError, format!("Invalid answer sheet: {}", e))
        })
    }

    /// Walks the wizard page by page, then through focus selection to results.
    ///
    /// Stops at the first refused step; an area missing either rating
    /// stops on its page with `PageIncomplete`.
    pub fn apply(&self, wizard: &mut AssessmentWizard) -> Result<(), WizardError> {
        while let Some(area) = wizard.current_area() {
            if let Some(answer) = self.ratings.get(&area) {
                if let Some(value) = answer.satisfaction {
                    wizard.set_satisfaction(area, value)?;
                }
                if let Some(value) = answer.importance {
                    wizard.set_importance(area, value)?;
                }
            }
            wizard.next()?;
        }

        if wizard.step() == WizardStep::FocusSelection {
            for area in &self.focus {
                if !wizard.scores().focus().contains(*area) {
                    wizard.toggle_focus(*area)?;
                }
            }
            wizard.next()?;
        }
        Ok(())
    }
}
