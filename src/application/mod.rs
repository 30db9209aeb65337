//! Application layer - Handlers and the assessment session.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read, and `AssessmentSession`
//! ties one wizard run to both.

mod answers;
pub mod handlers;
mod results;
mod session;

pub use answers::{AnswerSheet, RatingAnswer};
pub use handlers::{
    LoadPreviousAssessmentHandler, LoadPreviousAssessmentQuery, SaveAssessmentCommand,
    SaveAssessmentHandler, SaveAssessmentResult,
};
pub use results::{AssessmentResults, QuadrantGroup};
pub use session::AssessmentSession;
