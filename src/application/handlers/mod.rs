//! Command and query handlers.

pub mod assessment;

pub use assessment::{
    LoadPreviousAssessmentHandler, LoadPreviousAssessmentQuery, SaveAssessmentCommand,
    SaveAssessmentHandler, SaveAssessmentResult,
};
