//! LifeArea catalog - the fixed set of life dimensions being rated.
//!
//! The catalog is static configuration: 8 entries in a canonical order
//! that drives page order in the wizard, spoke order on the radar chart,
//! and tie-breaking in the gap ranking.

mod catalog;
mod resources;

pub use catalog::{LifeArea, CATALOG_SIZE};
pub use resources::{ResourceLink, DEFAULT_RESOURCES_BASE_URL};
