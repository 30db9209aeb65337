//! LifeArea enum representing the 8 rated life dimensions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of entries in the catalog.
pub const CATALOG_SIZE: usize = 8;

static BY_KEY: Lazy<HashMap<&'static str, LifeArea>> =
    Lazy::new(|| LifeArea::ALL.iter().map(|area| (area.key(), *area)).collect());

/// One of the 8 fixed life areas, in canonical catalog order.
///
/// `Ord` follows catalog order, so ordered maps keyed by `LifeArea`
/// iterate the same way the wizard pages do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeArea {
    Physical,
    Mental,
    Career,
    Finances,
    Relationships,
    Growth,
    Recreation,
    Environment,
}

impl LifeArea {
    /// The catalog in canonical order.
    pub const ALL: [LifeArea; CATALOG_SIZE] = [
        LifeArea::Physical,
        LifeArea::Mental,
        LifeArea::Career,
        LifeArea::Finances,
        LifeArea::Relationships,
        LifeArea::Growth,
        LifeArea::Recreation,
        LifeArea::Environment,
    ];

    /// Returns all life areas in catalog order.
    pub fn all() -> &'static [LifeArea; CATALOG_SIZE] {
        &Self::ALL
    }

    /// Returns the area shown on the given wizard page, if the page exists.
    pub fn at(index: usize) -> Option<LifeArea> {
        Self::ALL.get(index).copied()
    }

    /// Returns the 0-based position of this area in the catalog.
    pub fn order_index(&self) -> usize {
        *self as usize
    }

    /// Looks up an area by its stable key.
    pub fn from_key(key: &str) -> Option<LifeArea> {
        BY_KEY.get(key).copied()
    }

    /// Stable key used in persisted maps and URLs.
    pub fn key(&self) -> &'static str {
        match self {
            LifeArea::Physical => "physical",
            LifeArea::Mental => "mental",
            LifeArea::Career => "career",
            LifeArea::Finances => "finances",
            LifeArea::Relationships => "relationships",
            LifeArea::Growth => "growth",
            LifeArea::Recreation => "recreation",
            LifeArea::Environment => "environment",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LifeArea::Physical => "Physical Health",
            LifeArea::Mental => "Mental & Emotional Health",
            LifeArea::Career => "Career & Work",
            LifeArea::Finances => "Finances",
            LifeArea::Relationships => "Relationships",
            LifeArea::Growth => "Personal Growth",
            LifeArea::Recreation => "Fun & Recreation",
            LifeArea::Environment => "Home & Environment",
        }
    }

    /// Titles of the resource categories linked from the results page.
    pub fn resource_categories(&self) -> &'static [&'static str] {
        match self {
            LifeArea::Physical => &["Fitness", "Nutrition"],
            LifeArea::Mental => &["Mental Health", "Mindfulness"],
            LifeArea::Career => &["Career"],
            LifeArea::Finances => &["Personal Finance"],
            LifeArea::Relationships => &["Relationships", "Family"],
            LifeArea::Growth => &["Personal Development", "Learning"],
            LifeArea::Recreation => &["Hobbies"],
            LifeArea::Environment => &["Home", "Organization"],
        }
    }
}

impl fmt::Display for LifeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LifeArea {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifeArea::from_key(s).ok_or_else(|| {
            ValidationError::invalid_format("life_area", format!("unknown key '{}'", s))
        })
    }
}
