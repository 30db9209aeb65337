//! In-Memory Assessment Repository
//!
//! Keeps assessment records in memory.
//! Useful for testing, development and anonymous demo runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{AssessmentSnapshot, PreviousAssessment};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{AssessmentRecord, AssessmentRepository, SavedAssessment};

/// In-memory storage for assessment records
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    records: Arc<RwLock<HashMap<UserId, Vec<AssessmentRecord>>>>,
}

impl InMemoryAssessmentRepository {
    /// Create a new, empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly (useful for tests)
    pub async fn insert(&self, record: AssessmentRecord) {
        self.records
            .write()
            .await
            .entry(record.user_id.clone())
            .or_default()
            .push(record);
    }

    /// Number of records stored for a user
    pub async fn count_for(&self, user_id: &UserId) -> usize {
        self.records
            .read()
            .await
            .get(user_id)
            .map_or(0, Vec::len)
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn load_latest(&self, user_id: &UserId) -> Result<Option<PreviousAssessment>, DomainError> {
        let records = self.records.read().await;
        // max_by_key keeps the last of equal timestamps, i.e. the latest append.
        Ok(records
            .get(user_id)
            .and_then(|list| list.iter().max_by_key(|r| r.created_at))
            .cloned()
            .map(AssessmentRecord::into_previous))
    }

    async fn save(
        &self,
        user_id: &UserId,
        snapshot: &AssessmentSnapshot,
    ) -> Result<SavedAssessment, DomainError> {
        let record = AssessmentRecord::from_snapshot(user_id, snapshot, Timestamp::now());
        let saved = SavedAssessment {
            id: record.id,
            created_at: record.created_at,
        };
        self.insert(record).await;
        Ok(saved)
    }
}
