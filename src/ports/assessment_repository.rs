//! AssessmentRepository port - Persistence of completed assessments.
//!
//! Records are append-only: every completed assessment is a new record and
//! nothing is edited in place. The store assigns the creation timestamp.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{
    known_area_scores, known_focus_areas, AssessmentSnapshot, PreviousAssessment,
};
use crate::domain::foundation::{AssessmentId, DomainError, Score, Timestamp, UserId};
use crate::domain::life_area::LifeArea;

/// A persisted assessment row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    #[serde(deserialize_with = "known_area_scores")]
    pub satisfaction: BTreeMap<LifeArea, Score>,
    #[serde(deserialize_with = "known_area_scores")]
    pub importance: BTreeMap<LifeArea, Score>,
    #[serde(default, deserialize_with = "known_focus_areas")]
    pub focus_areas: Vec<LifeArea>,
    /// Assigned by the store, not taken from the snapshot.
    pub created_at: Timestamp,
}

impl AssessmentRecord {
    /// Builds a new record from a snapshot, stamped with `created_at`.
    pub fn from_snapshot(
        user_id: &UserId,
        snapshot: &AssessmentSnapshot,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            user_id: user_id.clone(),
            satisfaction: snapshot.satisfaction_map().clone(),
            importance: snapshot.importance_map().clone(),
            focus_areas: snapshot.focus_areas().to_vec(),
            created_at,
        }
    }

    /// Read-only view used for comparison.
    pub fn into_previous(self) -> PreviousAssessment {
        PreviousAssessment::new(
            self.satisfaction,
            self.importance,
            self.focus_areas,
            self.created_at,
        )
    }
}

/// What the store hands back after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedAssessment {
    pub id: AssessmentId,
    pub created_at: Timestamp,
}

/// Persistence gateway for completed assessments.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Most recently created assessment for the user, if any.
    async fn load_latest(&self, user_id: &UserId) -> Result<Option<PreviousAssessment>, DomainError>;

    /// Appends a new record for the snapshot.
    async fn save(
        &self,
        user_id: &UserId,
        snapshot: &AssessmentSnapshot,
    ) -> Result<SavedAssessment, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::ScoreStore;

    #[test]
    fn record_copies_snapshot_maps_but_not_timestamp() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Career, 8).unwrap();
        store.toggle_focus(LifeArea::Growth);
        let snapshot = store.finalize(Timestamp::from_unix_secs(100).unwrap());
        let user = UserId::new("user-1").unwrap();
        let server_time = Timestamp::from_unix_secs(200).unwrap();

        let record = AssessmentRecord::from_snapshot(&user, &snapshot, server_time);

        assert_eq!(record.satisfaction[&LifeArea::Career].value(), 8);
        assert_eq!(record.satisfaction.len(), 8);
        assert_eq!(record.focus_areas, vec![LifeArea::Growth]);
        assert_eq!(record.created_at, server_time);
    }

    #[test]
    fn into_previous_keeps_values() {
        let snapshot = ScoreStore::new().finalize(Timestamp::now());
        let user = UserId::new("user-1").unwrap();
        let created_at = Timestamp::from_unix_secs(300).unwrap();
        let previous = AssessmentRecord::from_snapshot(&user, &snapshot, created_at).into_previous();

        assert_eq!(previous.created_at(), created_at);
        assert_eq!(previous.satisfaction(LifeArea::Physical), Some(Score::MIDPOINT));
    }
}
