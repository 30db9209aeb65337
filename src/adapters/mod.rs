//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Assessment persistence (in-memory, YAML files)

pub mod storage;

pub use storage::{
    repository_for, FileAssessmentRepository, InMemoryAssessmentRepository, StorageError,
};
