//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Loads the latest and appends completed assessments

mod assessment_repository;

pub use assessment_repository::{AssessmentRecord, AssessmentRepository, SavedAssessment};
