//! Assessment module - ratings captured by the wizard and their snapshots.
//!
//! # Components
//!
//! - `ScoreStore` - Mutable per-area satisfaction/importance ratings (tri-state: unset or 1..=10)
//! - `FocusSelection` - Insertion-ordered set of areas the user wants to focus on
//! - `AssessmentSnapshot` - Finalized, fully-defaulted ratings eligible for persistence
//! - `PreviousAssessment` - A snapshot loaded back from storage, used for comparison only
//! - `AreaScores` - Read-only view consumed by the analysis services

mod focus;
mod score_store;
mod snapshot;

pub use focus::FocusSelection;
pub use score_store::{ScoreEntry, ScoreStore};
pub use snapshot::{AreaScores, AssessmentSnapshot, PreviousAssessment};

pub(crate) use snapshot::{known_area_scores, known_focus_areas};
