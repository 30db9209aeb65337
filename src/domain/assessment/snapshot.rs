//! Finalized assessment snapshots.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Score, Timestamp};
use crate::domain::life_area::LifeArea;

/// Read-only per-area ratings with no unset state.
///
/// Implemented by the live `ScoreStore` (unset ratings read as the
/// midpoint) and by `AssessmentSnapshot`, so analysis gives identical
/// answers before and after finalization.
pub trait AreaScores {
    fn satisfaction_of(&self, area: LifeArea) -> Score;

    fn importance_of(&self, area: LifeArea) -> Score;

    /// Mean satisfaction across the catalog.
    fn average_satisfaction(&self) -> f64 {
        mean(LifeArea::ALL.iter().map(|a| self.satisfaction_of(*a)))
    }

    /// Mean importance across the catalog.
    fn average_importance(&self) -> f64 {
        mean(LifeArea::ALL.iter().map(|a| self.importance_of(*a)))
    }
}

fn mean(scores: impl Iterator<Item = Score>) -> f64 {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), s| {
        (sum + u32::from(s.value()), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(count)
    }
}

/// Deserializes a per-area score map, dropping keys the catalog does not know.
pub(crate) fn known_area_scores<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<LifeArea, Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Score>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, score)| known_area(&key).map(|area| (area, score)))
        .collect())
}

/// Deserializes a focus list, dropping keys the catalog does not know.
pub(crate) fn known_focus_areas<'de, D>(deserializer: D) -> Result<Vec<LifeArea>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(|key| known_area(key)).collect())
}

fn known_area(key: &str) -> Option<LifeArea> {
    let area = LifeArea::from_key(key);
    if area.is_none() {
        tracing::debug!(key, "dropping unknown life area from stored record");
    }
    area
}

/// A completed assessment: every area rated, ready to persist.
///
/// Immutable once built. Replacing the timestamp yields a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    satisfaction: BTreeMap<LifeArea, Score>,
    importance: BTreeMap<LifeArea, Score>,
    focus_areas: Vec<LifeArea>,
    created_at: Timestamp,
}

impl AssessmentSnapshot {
    /// Creates a snapshot; areas missing from either map read as the midpoint.
    pub fn new(
        satisfaction: BTreeMap<LifeArea, Score>,
        importance: BTreeMap<LifeArea, Score>,
        focus_areas: Vec<LifeArea>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            satisfaction,
            importance,
            focus_areas,
            created_at,
        }
    }

    pub fn satisfaction(&self, area: LifeArea) -> Score {
        self.satisfaction.get(&area).copied().unwrap_or(Score::MIDPOINT)
    }

    pub fn importance(&self, area: LifeArea) -> Score {
        self.importance.get(&area).copied().unwrap_or(Score::MIDPOINT)
    }

    pub fn satisfaction_map(&self) -> &BTreeMap<LifeArea, Score> {
        &self.satisfaction
    }

    pub fn importance_map(&self) -> &BTreeMap<LifeArea, Score> {
        &self.importance
    }

    /// Focus areas in the order they were selected.
    pub fn focus_areas(&self) -> &[LifeArea] {
        &self.focus_areas
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns a copy stamped with a different creation time.
    pub fn with_created_at(&self, created_at: Timestamp) -> Self {
        Self {
            created_at,
            ..self.clone()
        }
    }

    /// Satisfaction values in catalog order, as plotted on the radar chart.
    pub fn satisfaction_series(&self) -> Vec<f64> {
        LifeArea::ALL
            .iter()
            .map(|a| f64::from(self.satisfaction(*a).value()))
            .collect()
    }
}

impl AreaScores for AssessmentSnapshot {
    fn satisfaction_of(&self, area: LifeArea) -> Score {
        self.satisfaction(area)
    }

    fn importance_of(&self, area: LifeArea) -> Score {
        self.importance(area)
    }
}

/// The user's most recent stored assessment, loaded for comparison.
///
/// Records written under an older catalog may lack some areas, so every
/// lookup is optional. Areas the catalog no longer has are dropped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousAssessment {
    #[serde(deserialize_with = "known_area_scores")]
    satisfaction: BTreeMap<LifeArea, Score>,
    #[serde(default, deserialize_with = "known_area_scores")]
    importance: BTreeMap<LifeArea, Score>,
    #[serde(default, deserialize_with = "known_focus_areas")]
    focus_areas: Vec<LifeArea>,
    created_at: Timestamp,
}

impl PreviousAssessment {
    pub fn new(
        satisfaction: BTreeMap<LifeArea, Score>,
        importance: BTreeMap<LifeArea, Score>,
        focus_areas: Vec<LifeArea>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            satisfaction,
            importance,
            focus_areas,
            created_at,
        }
    }

    pub fn satisfaction(&self, area: LifeArea) -> Option<Score> {
        self.satisfaction.get(&area).copied()
    }

    pub fn importance(&self, area: LifeArea) -> Option<Score> {
        self.importance.get(&area).copied()
    }

    pub fn focus_areas(&self) -> &[LifeArea] {
        &self.focus_areas
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Satisfaction in catalog order for the overlay polygon; missing areas plot at 0.
    pub fn satisfaction_series(&self) -> Vec<f64> {
        LifeArea::ALL
            .iter()
            .map(|a| self.satisfaction(*a).map_or(0.0, |s| f64::from(s.value())))
            .collect()
    }

    /// Mean satisfaction over the areas present in the record.
    pub fn average_satisfaction(&self) -> Option<f64> {
        if self.satisfaction.is_empty() {
            return None;
        }
        Some(mean(self.satisfaction.values().copied()))
    }
}

impl From<AssessmentSnapshot> for PreviousAssessment {
    fn from(snapshot: AssessmentSnapshot) -> Self {
        Self {
            satisfaction: snapshot.satisfaction,
            importance: snapshot.importance,
            focus_areas: snapshot.focus_areas,
            created_at: snapshot.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    fn uniform_snapshot(sat: u8, imp: u8) -> AssessmentSnapshot {
        AssessmentSnapshot::new(
            LifeArea::ALL.iter().map(|a| (*a, score(sat))).collect(),
            LifeArea::ALL.iter().map(|a| (*a, score(imp))).collect(),
            vec![],
            Timestamp::from_unix_secs(1_700_000_000).unwrap(),
        )
    }

    #[test]
    fn averages_over_catalog() {
        let snapshot = uniform_snapshot(3, 8);
        assert!((snapshot.average_satisfaction() - 3.0).abs() < f64::EPSILON);
        assert!((snapshot.average_importance() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_keys_read_as_midpoint() {
        let snapshot = AssessmentSnapshot::new(
            BTreeMap::new(),
            BTreeMap::new(),
            vec![],
            Timestamp::now(),
        );
        assert_eq!(snapshot.satisfaction(LifeArea::Career), Score::MIDPOINT);
    }

    #[test]
    fn with_created_at_leaves_original_untouched() {
        let original = uniform_snapshot(4, 4);
        let stamped = original.with_created_at(Timestamp::from_unix_secs(42).unwrap());
        assert_ne!(original.created_at(), stamped.created_at());
        assert_eq!(original.satisfaction_map(), stamped.satisfaction_map());
    }

    #[test]
    fn satisfaction_series_is_in_catalog_order() {
        let mut sat: BTreeMap<_, _> = LifeArea::ALL.iter().map(|a| (*a, score(5))).collect();
        sat.insert(LifeArea::Physical, score(9));
        sat.insert(LifeArea::Environment, score(1));
        let snapshot = AssessmentSnapshot::new(sat, BTreeMap::new(), vec![], Timestamp::now());

        let series = snapshot.satisfaction_series();
        assert_eq!(series.len(), 8);
        assert_eq!(series[0], 9.0);
        assert_eq!(series[7], 1.0);
    }

    #[test]
    fn serializes_maps_by_key() {
        let json = serde_json::to_value(uniform_snapshot(6, 7)).unwrap();
        assert_eq!(json["satisfaction"]["career"], 6);
        assert_eq!(json["importance"]["environment"], 7);
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn previous_tolerates_partial_records() {
        let json = r#"{
            "satisfaction": { "physical": 4, "career": 7 },
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let previous: PreviousAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(previous.satisfaction(LifeArea::Career), Some(score(7)));
        assert_eq!(previous.satisfaction(LifeArea::Mental), None);
        assert_eq!(previous.importance(LifeArea::Career), None);
        assert_eq!(previous.average_satisfaction(), Some(5.5));
    }

    #[test]
    fn previous_drops_areas_missing_from_catalog() {
        let yaml = "satisfaction:\n  physical: 4\n  pets: 9\nimportance:\n  pets: 3\n  career: 6\nfocusAreas: [pets, career]\ncreatedAt: 2024-01-15T10:30:00Z\n";
        let previous: PreviousAssessment = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(previous.satisfaction(LifeArea::Physical), Some(score(4)));
        assert_eq!(previous.importance(LifeArea::Career), Some(score(6)));
        assert_eq!(previous.focus_areas(), &[LifeArea::Career]);
        assert_eq!(previous.average_satisfaction(), Some(4.0));
    }

    #[test]
    fn previous_rejects_out_of_range_values() {
        let json = r#"{ "satisfaction": { "physical": 0 }, "createdAt": "2024-01-15T10:30:00Z" }"#;
        assert!(serde_json::from_str::<PreviousAssessment>(json).is_err());
    }

    #[test]
    fn previous_from_snapshot_keeps_values() {
        let snapshot = uniform_snapshot(2, 9);
        let previous = PreviousAssessment::from(snapshot.clone());
        assert_eq!(previous.satisfaction(LifeArea::Growth), Some(score(2)));
        assert_eq!(previous.created_at(), snapshot.created_at());
    }
}
