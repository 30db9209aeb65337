//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `life_area` - The fixed catalog of rated life areas
//! - `assessment` - Score store, focus selection and snapshots
//! - `analysis` - Pure services: quadrants, gap ranking, radar geometry, history
//! - `wizard` - The multi-step rating flow and its navigation gates

pub mod analysis;
pub mod assessment;
pub mod foundation;
pub mod life_area;
pub mod wizard;
