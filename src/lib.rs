//! Life Wheel - Wheel-of-Life Self Assessment
//!
//! Rates eight fixed life areas on satisfaction and importance through a
//! gated multi-step wizard, then derives quadrant classifications, focus
//! suggestions, radar chart geometry and a comparison with the previous
//! assessment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
