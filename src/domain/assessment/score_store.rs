//! ScoreStore - the in-progress ratings for one wizard run.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::foundation::{Score, Timestamp, ValidationError};
use crate::domain::life_area::{LifeArea, CATALOG_SIZE};

use super::{AreaScores, AssessmentSnapshot, FocusSelection};

/// Satisfaction and importance for one area; each is unset until tapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    pub satisfaction: Option<Score>,
    pub importance: Option<Score>,
}

impl ScoreEntry {
    /// True when both axes have been rated.
    pub fn is_complete(&self) -> bool {
        self.satisfaction.is_some() && self.importance.is_some()
    }

    /// Satisfaction with the midpoint substituted when unset.
    pub fn effective_satisfaction(&self) -> Score {
        self.satisfaction.unwrap_or(Score::MIDPOINT)
    }

    /// Importance with the midpoint substituted when unset.
    pub fn effective_importance(&self) -> Score {
        self.importance.unwrap_or(Score::MIDPOINT)
    }
}

/// Ratings for every catalog area plus the focus selection.
///
/// Invalid input is rejected before any field is touched, so a failed
/// `set_*` call never leaves the store half-updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStore {
    entries: [ScoreEntry; CATALOG_SIZE],
    focus: FocusSelection,
}

impl ScoreStore {
    /// Creates a store with every area unset and no focus areas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for an area.
    pub fn entry(&self, area: LifeArea) -> ScoreEntry {
        self.entries[area.order_index()]
    }

    /// Returns the raw satisfaction rating, `None` if unset.
    pub fn satisfaction(&self, area: LifeArea) -> Option<Score> {
        self.entry(area).satisfaction
    }

    /// Returns the raw importance rating, `None` if unset.
    pub fn importance(&self, area: LifeArea) -> Option<Score> {
        self.entry(area).importance
    }

    /// Sets satisfaction for an area, replacing any prior value.
    pub fn set_satisfaction(&mut self, area: LifeArea, value: u8) -> Result<Score, ValidationError> {
        let score = Score::try_new(value)?;
        self.entries[area.order_index()].satisfaction = Some(score);
        Ok(score)
    }

    /// Sets importance for an area, replacing any prior value.
    pub fn set_importance(&mut self, area: LifeArea, value: u8) -> Result<Score, ValidationError> {
        let score = Score::try_new(value)?;
        self.entries[area.order_index()].importance = Some(score);
        Ok(score)
    }

    /// True iff both satisfaction and importance are set for the area.
    pub fn is_complete(&self, area: LifeArea) -> bool {
        self.entry(area).is_complete()
    }

    /// True iff every area in the catalog is complete.
    pub fn all_complete(&self) -> bool {
        self.entries.iter().all(ScoreEntry::is_complete)
    }

    /// Number of areas with both ratings set.
    pub fn complete_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_complete()).count()
    }

    /// Toggles an area in the focus selection; returns whether it is now selected.
    pub fn toggle_focus(&mut self, area: LifeArea) -> bool {
        self.focus.toggle(area)
    }

    pub fn focus(&self) -> &FocusSelection {
        &self.focus
    }

    /// Clears every rating and the focus selection.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a snapshot, replacing every unset rating with the midpoint (5).
    pub fn finalize(&self, created_at: Timestamp) -> AssessmentSnapshot {
        let satisfaction: BTreeMap<_, _> = LifeArea::ALL
            .iter()
            .map(|area| (*area, self.entry(*area).effective_satisfaction()))
            .collect();
        let importance: BTreeMap<_, _> = LifeArea::ALL
            .iter()
            .map(|area| (*area, self.entry(*area).effective_importance()))
            .collect();

        AssessmentSnapshot::new(
            satisfaction,
            importance,
            self.focus.as_slice().to_vec(),
            created_at,
        )
    }
}

impl AreaScores for ScoreStore {
    fn satisfaction_of(&self, area: LifeArea) -> Score {
        self.entry(area).effective_satisfaction()
    }

    fn importance_of(&self, area: LifeArea) -> Score {
        self.entry(area).effective_importance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate_all(store: &mut ScoreStore, satisfaction: u8, importance: u8) {
        for area in LifeArea::ALL {
            store.set_satisfaction(area, satisfaction).unwrap();
            store.set_importance(area, importance).unwrap();
        }
    }

    #[test]
    fn new_store_is_unset_everywhere() {
        let store = ScoreStore::new();
        for area in LifeArea::ALL {
            assert_eq!(store.entry(area), ScoreEntry::default());
            assert!(!store.is_complete(area));
        }
        assert!(!store.all_complete());
        assert!(store.focus().is_empty());
    }

    #[test]
    fn set_satisfaction_replaces_prior_value() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Career, 3).unwrap();
        store.set_satisfaction(LifeArea::Career, 9).unwrap();
        assert_eq!(store.satisfaction(LifeArea::Career).map(|s| s.value()), Some(9));
        assert_eq!(store.importance(LifeArea::Career), None);
    }

    #[test]
    fn out_of_range_value_leaves_store_unchanged() {
        let mut store = ScoreStore::new();
        store.set_importance(LifeArea::Mental, 7).unwrap();
        let before = store.clone();

        assert!(store.set_importance(LifeArea::Mental, 0).is_err());
        assert!(store.set_satisfaction(LifeArea::Mental, 11).is_err());
        assert_eq!(store, before);
    }

    #[test]
    fn is_complete_requires_both_axes() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Physical, 4).unwrap();
        assert!(!store.is_complete(LifeArea::Physical));
        store.set_importance(LifeArea::Physical, 6).unwrap();
        assert!(store.is_complete(LifeArea::Physical));
        assert_eq!(store.complete_count(), 1);
    }

    #[test]
    fn all_complete_after_rating_every_area() {
        let mut store = ScoreStore::new();
        rate_all(&mut store, 3, 8);
        assert!(store.all_complete());
        assert_eq!(store.complete_count(), CATALOG_SIZE);
    }

    #[test]
    fn all_complete_false_with_one_axis_missing() {
        let mut store = ScoreStore::new();
        for area in LifeArea::ALL {
            store.set_satisfaction(area, 5).unwrap();
            if area != LifeArea::Environment {
                store.set_importance(area, 5).unwrap();
            }
        }
        assert!(!store.all_complete());
    }

    #[test]
    fn finalize_defaults_unset_values_to_five() {
        let store = ScoreStore::new();
        let snapshot = store.finalize(Timestamp::now());
        for area in LifeArea::ALL {
            assert_eq!(snapshot.satisfaction(area).value(), 5);
            assert_eq!(snapshot.importance(area).value(), 5);
        }
        assert!((snapshot.average_satisfaction() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn finalize_keeps_set_values_and_defaults_the_rest() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Finances, 2).unwrap();
        store.set_importance(LifeArea::Growth, 9).unwrap();

        let snapshot = store.finalize(Timestamp::now());
        assert_eq!(snapshot.satisfaction(LifeArea::Finances).value(), 2);
        assert_eq!(snapshot.importance(LifeArea::Finances).value(), 5);
        assert_eq!(snapshot.importance(LifeArea::Growth).value(), 9);
        assert_eq!(snapshot.satisfaction(LifeArea::Growth).value(), 5);
    }

    #[test]
    fn finalize_carries_focus_in_insertion_order() {
        let mut store = ScoreStore::new();
        store.toggle_focus(LifeArea::Recreation);
        store.toggle_focus(LifeArea::Career);
        let snapshot = store.finalize(Timestamp::now());
        assert_eq!(
            snapshot.focus_areas(),
            &[LifeArea::Recreation, LifeArea::Career]
        );
    }

    #[test]
    fn area_scores_view_uses_midpoint_for_unset() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Mental, 8).unwrap();
        assert_eq!(store.satisfaction_of(LifeArea::Mental).value(), 8);
        assert_eq!(store.importance_of(LifeArea::Mental).value(), 5);
    }

    #[test]
    fn clear_resets_ratings_and_focus() {
        let mut store = ScoreStore::new();
        rate_all(&mut store, 7, 7);
        store.toggle_focus(LifeArea::Physical);
        store.clear();
        assert_eq!(store, ScoreStore::new());
    }
}
