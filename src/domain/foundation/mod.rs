//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the life-wheel domain.

mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, UserId};
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
