//! Gap Ranker - Focus suggestions ordered by improvement gap.

use serde::Serialize;

use crate::domain::assessment::AreaScores;
use crate::domain::foundation::Score;
use crate::domain::life_area::LifeArea;

/// Most suggestions ever shown.
pub const MAX_SUGGESTIONS: usize = 4;

/// Below this many positive-gap suggestions the ranker falls back to the
/// top of the full list.
pub const MIN_SUGGESTIONS: usize = 2;

/// Improvement gap for one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaGap {
    pub area: LifeArea,
    pub satisfaction: Score,
    pub importance: Score,
    /// importance − satisfaction, in −9..=9.
    pub gap: i8,
}

impl AreaGap {
    fn of(scores: &impl AreaScores, area: LifeArea) -> Self {
        let satisfaction = scores.satisfaction_of(area);
        let importance = scores.importance_of(area);
        Self {
            area,
            satisfaction,
            importance,
            gap: importance.value() as i8 - satisfaction.value() as i8,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.gap > 0
    }
}

/// Ranked gaps split into the suggestions shown first and the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapRanking {
    /// Every area, gap descending, ties in catalog order.
    pub ranked: Vec<AreaGap>,
    /// Up to four areas suggested as focus candidates.
    pub suggested: Vec<AreaGap>,
    /// `ranked` minus `suggested`, same order ("show all").
    pub remaining: Vec<AreaGap>,
    /// True when too few positive gaps existed and the fallback filled the list.
    pub used_fallback: bool,
}

impl GapRanking {
    pub fn is_suggested(&self, area: LifeArea) -> bool {
        self.suggested.iter().any(|g| g.area == area)
    }
}

/// Ranks areas by improvement gap.
pub struct GapRanker;

impl GapRanker {
    /// Ranks every catalog area.
    ///
    /// Suggestions are the first four positive gaps. If that yields fewer
    /// than two, the first four of the full ranking are used instead,
    /// zero or negative gaps included.
    pub fn rank(scores: &impl AreaScores) -> GapRanking {
        let mut ranked: Vec<AreaGap> = LifeArea::ALL
            .iter()
            .map(|area| AreaGap::of(scores, *area))
            .collect();
        // sort_by is stable: equal gaps stay in catalog order.
        ranked.sort_by(|a, b| b.gap.cmp(&a.gap));

        let positive: Vec<AreaGap> = ranked
            .iter()
            .filter(|g| g.is_positive())
            .take(MAX_SUGGESTIONS)
            .copied()
            .collect();

        let used_fallback = positive.len() < MIN_SUGGESTIONS;
        let suggested = if used_fallback {
            ranked.iter().take(MAX_SUGGESTIONS).copied().collect()
        } else {
            positive
        };

        let remaining = ranked
            .iter()
            .filter(|g| !suggested.iter().any(|s: &AreaGap| s.area == g.area))
            .copied()
            .collect();

        GapRanking {
            ranked,
            suggested,
            remaining,
            used_fallback,
        }
    }
}
