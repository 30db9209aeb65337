//! Wizard module - the linear rating flow.
//!
//! Rating pages (one per life area) → focus selection → results.

mod aggregate;
mod step;

pub use aggregate::{AssessmentWizard, SaveStatus, WizardError, WizardProgress};
pub use step::{WizardStage, WizardStep, LAST_RATING_PAGE, RATING_PAGE_COUNT};
