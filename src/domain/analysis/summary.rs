//! Assessment summary statistics.

use serde::Serialize;

use crate::domain::assessment::AreaScores;
use crate::domain::life_area::LifeArea;

use super::{Quadrant, QuadrantClassifier};

/// Headline numbers for the results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSummary {
    pub average_satisfaction: f64,
    pub average_importance: f64,
    /// Population variance of satisfaction across the catalog.
    pub satisfaction_variance: f64,
    pub satisfaction_std_dev: f64,
    /// Highest satisfaction; ties go to the earlier catalog entry.
    pub strongest_area: LifeArea,
    /// Lowest satisfaction; ties go to the earlier catalog entry.
    pub weakest_area: LifeArea,
    pub quadrant_counts: Vec<(Quadrant, usize)>,
}

impl AssessmentSummary {
    pub fn compute(scores: &impl AreaScores) -> Self {
        let values: Vec<f64> = LifeArea::ALL
            .iter()
            .map(|a| f64::from(scores.satisfaction_of(*a).value()))
            .collect();
        let average_satisfaction = scores.average_satisfaction();
        let satisfaction_variance = values
            .iter()
            .map(|v| (v - average_satisfaction).powi(2))
            .sum::<f64>()
            / values.len() as f64;

        let mut strongest_area = LifeArea::ALL[0];
        let mut weakest_area = LifeArea::ALL[0];
        for area in LifeArea::ALL.iter().skip(1) {
            let value = scores.satisfaction_of(*area);
            if value > scores.satisfaction_of(strongest_area) {
                strongest_area = *area;
            }
            if value < scores.satisfaction_of(weakest_area) {
                weakest_area = *area;
            }
        }

        let classifications = QuadrantClassifier::classify_all(scores);
        let quadrant_counts = Quadrant::ALL
            .iter()
            .map(|q| (*q, QuadrantClassifier::count(&classifications, *q)))
            .collect();

        Self {
            average_satisfaction,
            average_importance: scores.average_importance(),
            satisfaction_variance,
            satisfaction_std_dev: satisfaction_variance.sqrt(),
            strongest_area,
            weakest_area,
            quadrant_counts,
        }
    }
}
