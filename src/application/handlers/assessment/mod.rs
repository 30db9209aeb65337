//! Assessment handlers - loading history and saving results.

mod load_previous_assessment;
mod save_assessment;

pub use load_previous_assessment::{LoadPreviousAssessmentHandler, LoadPreviousAssessmentQuery};
pub use save_assessment::{SaveAssessmentCommand, SaveAssessmentHandler, SaveAssessmentResult};
