//! AssessmentResults - every derived view of a finalized assessment.

use serde::Serialize;

use crate::domain::analysis::{
    AreaClassification, AssessmentSummary, GapRanker, GapRanking, HistoryComparator,
    HistoryComparison, Quadrant, QuadrantClassifier, RadarChart, RadarGeometry,
};
use crate::domain::assessment::{AssessmentSnapshot, PreviousAssessment};
use crate::domain::foundation::ValidationError;
use crate::domain::life_area::{LifeArea, ResourceLink};

/// Areas sharing one quadrant, with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuadrantGroup {
    pub quadrant: Quadrant,
    pub label: &'static str,
    pub guidance: &'static str,
    pub areas: Vec<LifeArea>,
}

/// Render-time bundle for the results page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResults {
    pub snapshot: AssessmentSnapshot,
    pub classifications: Vec<AreaClassification>,
    pub quadrants: Vec<QuadrantGroup>,
    pub gaps: GapRanking,
    pub summary: AssessmentSummary,
    pub chart: RadarChart,
    pub history: HistoryComparison,
    /// Links for the user's focus areas, or for the suggested areas
    /// when nothing was selected.
    pub resources: Vec<ResourceLink>,
}

impl AssessmentResults {
    /// Derives every view from `snapshot`, overlaying `previous` when loaded.
    pub fn compute(
        snapshot: &AssessmentSnapshot,
        previous: Option<&PreviousAssessment>,
        geometry: RadarGeometry,
        grid_levels: &[f64],
        resources_base_url: &str,
    ) -> Result<Self, ValidationError> {
        let classifications = QuadrantClassifier::classify_all(snapshot);
        let quadrants = QuadrantClassifier::group_by_quadrant(&classifications)
            .into_iter()
            .map(|(quadrant, areas)| QuadrantGroup {
                quadrant,
                label: quadrant.label(),
                guidance: quadrant.guidance(),
                areas,
            })
            .collect();

        let gaps = GapRanker::rank(snapshot);

        let previous_series = previous.map(PreviousAssessment::satisfaction_series);
        let chart = RadarChart::build(
            geometry,
            grid_levels,
            &snapshot.satisfaction_series(),
            previous_series.as_deref(),
        )?;

        let link_areas: Vec<LifeArea> = if snapshot.focus_areas().is_empty() {
            gaps.suggested.iter().map(|g| g.area).collect()
        } else {
            snapshot.focus_areas().to_vec()
        };
        let resources = link_areas
            .iter()
            .flat_map(|area| area.resource_links(resources_base_url))
            .collect();

        Ok(Self {
            snapshot: snapshot.clone(),
            summary: AssessmentSummary::compute(snapshot),
            history: HistoryComparator::compare(snapshot, previous),
            classifications,
            quadrants,
            gaps,
            chart,
            resources,
        })
    }
}
