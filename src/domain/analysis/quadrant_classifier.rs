//! Quadrant Classifier - Satisfaction/importance matrix placement.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::AreaScores;
use crate::domain::foundation::Score;
use crate::domain::life_area::LifeArea;

/// A rating strictly above this value counts as "high". 5 itself is low.
pub const QUADRANT_THRESHOLD: u8 = 5;

/// Where an area falls on the importance × satisfaction matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Important but unsatisfying.
    ActNow,
    /// Important and satisfying.
    Maintain,
    /// Neither important nor satisfying.
    Consider,
    /// Satisfying but not important.
    Rebalance,
}

impl Quadrant {
    /// All quadrants in display order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::ActNow,
        Quadrant::Maintain,
        Quadrant::Consider,
        Quadrant::Rebalance,
    ];

    /// Classifies a rating pair.
    pub fn classify(satisfaction: Score, importance: Score) -> Quadrant {
        let high_importance = importance.value() > QUADRANT_THRESHOLD;
        let high_satisfaction = satisfaction.value() > QUADRANT_THRESHOLD;

        match (high_importance, high_satisfaction) {
            (true, false) => Quadrant::ActNow,
            (true, true) => Quadrant::Maintain,
            (false, false) => Quadrant::Consider,
            (false, true) => Quadrant::Rebalance,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::ActNow => "Act Now",
            Quadrant::Maintain => "Maintain",
            Quadrant::Consider => "Consider",
            Quadrant::Rebalance => "Rebalance",
        }
    }

    /// Short guidance shown under the quadrant heading.
    pub fn guidance(&self) -> &'static str {
        match self {
            Quadrant::ActNow => "High importance, low satisfaction. These areas need attention first.",
            Quadrant::Maintain => "High importance, high satisfaction. Keep doing what works.",
            Quadrant::Consider => "Lower importance and satisfaction. Decide whether they deserve more of you.",
            Quadrant::Rebalance => "Satisfying but less important. Energy here could be redirected.",
        }
    }
}

/// Classification result for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaClassification {
    pub area: LifeArea,
    pub satisfaction: Score,
    pub importance: Score,
    pub quadrant: Quadrant,
}

/// Classifier over a full set of area scores.
pub struct QuadrantClassifier;

impl QuadrantClassifier {
    /// Classifies every catalog area, in catalog order.
    pub fn classify_all(scores: &impl AreaScores) -> Vec<AreaClassification> {
        LifeArea::ALL
            .iter()
            .map(|area| {
                let satisfaction = scores.satisfaction_of(*area);
                let importance = scores.importance_of(*area);
                AreaClassification {
                    area: *area,
                    satisfaction,
                    importance,
                    quadrant: Quadrant::classify(satisfaction, importance),
                }
            })
            .collect()
    }

    /// Groups areas by quadrant. Every quadrant is present, possibly empty;
    /// areas keep catalog order within a group.
    pub fn group_by_quadrant(
        classifications: &[AreaClassification],
    ) -> Vec<(Quadrant, Vec<LifeArea>)> {
        Quadrant::ALL
            .iter()
            .map(|q| {
                let areas = classifications
                    .iter()
                    .filter(|c| c.quadrant == *q)
                    .map(|c| c.area)
                    .collect();
                (*q, areas)
            })
            .collect()
    }

    /// Number of areas in a quadrant.
    pub fn count(classifications: &[AreaClassification], quadrant: Quadrant) -> usize {
        classifications.iter().filter(|c| c.quadrant == quadrant).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::ScoreStore;
    use proptest::prelude::*;

    fn s(v: u8) -> Score {
        Score::try_new(v).unwrap()
    }

    #[test]
    fn corners_match_rule_table() {
        assert_eq!(Quadrant::classify(s(10), s(10)), Quadrant::Maintain);
        assert_eq!(Quadrant::classify(s(1), s(10)), Quadrant::ActNow);
        assert_eq!(Quadrant::classify(s(1), s(1)), Quadrant::Consider);
        assert_eq!(Quadrant::classify(s(10), s(1)), Quadrant::Rebalance);
    }

    #[test]
    fn five_is_never_high() {
        assert_eq!(Quadrant::classify(s(5), s(5)), Quadrant::Consider);
        assert_eq!(Quadrant::classify(s(5), s(6)), Quadrant::ActNow);
        assert_eq!(Quadrant::classify(s(6), s(5)), Quadrant::Rebalance);
        assert_eq!(Quadrant::classify(s(6), s(6)), Quadrant::Maintain);
    }

    #[test]
    fn full_grid_has_expected_cell_counts() {
        let mut counts = std::collections::HashMap::new();
        for sat in 1..=10 {
            for imp in 1..=10 {
                *counts.entry(Quadrant::classify(s(sat), s(imp))).or_insert(0) += 1;
            }
        }
        // 5 low values × 5 high values per axis.
        for q in Quadrant::ALL {
            assert_eq!(counts[&q], 25, "{:?}", q);
        }
    }

    #[test]
    fn classify_all_uses_midpoint_for_unset() {
        let mut store = ScoreStore::new();
        store.set_satisfaction(LifeArea::Career, 2).unwrap();
        store.set_importance(LifeArea::Career, 9).unwrap();

        let result = QuadrantClassifier::classify_all(&store);
        assert_eq!(result.len(), 8);
        assert_eq!(result[2].area, LifeArea::Career);
        assert_eq!(result[2].quadrant, Quadrant::ActNow);
        assert!(result
            .iter()
            .filter(|c| c.area != LifeArea::Career)
            .all(|c| c.quadrant == Quadrant::Consider));
    }

    #[test]
    fn group_by_quadrant_lists_every_quadrant() {
        let store = ScoreStore::new();
        let classes = QuadrantClassifier::classify_all(&store);
        let groups = QuadrantClassifier::group_by_quadrant(&classes);

        assert_eq!(groups.len(), 4);
        let consider = groups.iter().find(|(q, _)| *q == Quadrant::Consider).unwrap();
        assert_eq!(consider.1, LifeArea::ALL.to_vec());
        assert_eq!(QuadrantClassifier::count(&classes, Quadrant::ActNow), 0);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: std::collections::HashSet<_> = Quadrant::ALL.iter().map(|q| q.label()).collect();
        assert_eq!(labels.len(), 4);
    }

    proptest! {
        #[test]
        fn classification_matches_threshold_rule(sat in 1u8..=10, imp in 1u8..=10) {
            let q = Quadrant::classify(s(sat), s(imp));
            let expected = match (imp > 5, sat > 5) {
                (true, false) => Quadrant::ActNow,
                (true, true) => Quadrant::Maintain,
                (false, false) => Quadrant::Consider,
                (false, true) => Quadrant::Rebalance,
            };
            prop_assert_eq!(q, expected);
            prop_assert_eq!(q, Quadrant::classify(s(sat), s(imp)));
        }
    }
}
