//! History Comparator - Change in satisfaction since the last assessment.
//!
//! Deltas are display-only; nothing here feeds back into classification
//! or ranking. A missing previous assessment yields `None` deltas, which
//! is distinct from a delta of zero.

use serde::Serialize;

use crate::domain::assessment::{AreaScores, AssessmentSnapshot, PreviousAssessment};
use crate::domain::foundation::{Score, Timestamp};
use crate::domain::life_area::LifeArea;

/// Direction of change for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improved,
    Declined,
    Unchanged,
}

impl Trend {
    fn from_delta(delta: i8) -> Self {
        match delta {
            d if d > 0 => Trend::Improved,
            d if d < 0 => Trend::Declined,
            _ => Trend::Unchanged,
        }
    }
}

/// Satisfaction change for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDelta {
    pub area: LifeArea,
    pub current: Score,
    pub previous: Option<Score>,
    pub delta: Option<i8>,
    pub trend: Option<Trend>,
}

/// Per-area deltas plus the overall average shift.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryComparison {
    pub areas: Vec<AreaDelta>,
    pub previous_taken_at: Option<Timestamp>,
    pub average_delta: Option<f64>,
}

impl HistoryComparison {
    pub fn has_previous(&self) -> bool {
        self.previous_taken_at.is_some()
    }

    pub fn delta_for(&self, area: LifeArea) -> Option<i8> {
        self.areas.iter().find(|d| d.area == area).and_then(|d| d.delta)
    }
}

/// Compares a finalized snapshot against the previous one.
pub struct HistoryComparator;

impl HistoryComparator {
    /// Computes `current − previous` satisfaction per area.
    ///
    /// Areas absent from the previous record get no delta.
    pub fn compare(
        current: &AssessmentSnapshot,
        previous: Option<&PreviousAssessment>,
    ) -> HistoryComparison {
        let areas = LifeArea::ALL
            .iter()
            .map(|area| {
                let now = current.satisfaction(*area);
                let before = previous.and_then(|p| p.satisfaction(*area));
                let delta = before.map(|b| now.value() as i8 - b.value() as i8);
                AreaDelta {
                    area: *area,
                    current: now,
                    previous: before,
                    delta,
                    trend: delta.map(Trend::from_delta),
                }
            })
            .collect();

        let average_delta = previous
            .and_then(PreviousAssessment::average_satisfaction)
            .map(|prev_avg| current.average_satisfaction() - prev_avg);

        HistoryComparison {
            areas,
            previous_taken_at: previous.map(PreviousAssessment::created_at),
            average_delta,
        }
    }
}
