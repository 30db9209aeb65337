//! Storage Adapters
//!
//! Implementations of the AssessmentRepository port.
//!
//! ## Available Adapters
//!
//! - **FileAssessmentRepository** - Stores assessments as YAML files on disk
//! - **InMemoryAssessmentRepository** - Stores assessments in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileAssessmentRepository, InMemoryAssessmentRepository};
//!
//! // Production: file-based storage
//! let repo = FileAssessmentRepository::new("./data/assessments");
//!
//! // Testing: in-memory storage
//! let repo = InMemoryAssessmentRepository::new();
//! ```

mod error;
mod file_assessment_repository;
mod in_memory_assessment_repository;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::AssessmentRepository;

pub use error::StorageError;
pub use file_assessment_repository::FileAssessmentRepository;
pub use in_memory_assessment_repository::InMemoryAssessmentRepository;

/// Builds the repository selected by configuration.
pub fn repository_for(config: &StorageConfig) -> Arc<dyn AssessmentRepository> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::debug!("using in-memory assessment storage");
            Arc::new(InMemoryAssessmentRepository::new())
        }
        StorageBackend::File => {
            tracing::debug!(data_dir = %config.data_dir.display(), "using file assessment storage");
            Arc::new(FileAssessmentRepository::new(&config.data_dir))
        }
    }
}
