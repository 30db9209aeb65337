//! Analysis Module - Pure domain services over assessment scores.
//!
//! # Components
//!
//! - `QuadrantClassifier` - Importance × satisfaction quadrant per area
//! - `GapRanker` - Improvement-gap ranking and focus suggestions
//! - `RadarGeometry` - Polar-to-Cartesian layout for the wheel chart
//! - `HistoryComparator` - Satisfaction deltas against the previous assessment
//! - `AssessmentSummary` - Mean, variance and extremes
//!
//! All functions are pure and stateless: identical input, identical output.

mod gap_ranker;
mod history_comparator;
mod quadrant_classifier;
mod radar_geometry;
mod summary;

pub use gap_ranker::{AreaGap, GapRanker, GapRanking, MAX_SUGGESTIONS, MIN_SUGGESTIONS};
pub use history_comparator::{AreaDelta, HistoryComparator, HistoryComparison, Trend};
pub use quadrant_classifier::{AreaClassification, Quadrant, QuadrantClassifier, QUADRANT_THRESHOLD};
pub use radar_geometry::{
    LabelAnchor, Point, RadarChart, RadarGeometry, RadarPolygon, Spoke, TextAlign,
    DEFAULT_GRID_LEVELS, DEFAULT_LABEL_OFFSET, RADAR_MAX_VALUE,
};
pub use summary::AssessmentSummary;
