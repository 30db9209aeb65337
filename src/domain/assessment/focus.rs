//! FocusSelection - the set of areas a user picked to work on.

use serde::{Deserialize, Serialize};

use crate::domain::life_area::LifeArea;

/// Unique set of life areas, iterated in insertion order.
///
/// The persisted `focus_areas` sequence is the order the user selected
/// them in, not catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FocusSelection(Vec<LifeArea>);

impl FocusSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds the area if absent, removes it if present.
    ///
    /// Returns true if the area is selected after the call.
    pub fn toggle(&mut self, area: LifeArea) -> bool {
        if let Some(pos) = self.0.iter().position(|a| *a == area) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(area);
            true
        }
    }

    /// Returns true if the area is selected.
    pub fn contains(&self, area: LifeArea) -> bool {
        self.0.contains(&area)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected areas in insertion order.
    pub fn as_slice(&self) -> &[LifeArea] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<LifeArea> for FocusSelection {
    fn from_iter<I: IntoIterator<Item = LifeArea>>(iter: I) -> Self {
        let mut selection = FocusSelection::new();
        for area in iter {
            if !selection.contains(area) {
                selection.0.push(area);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut focus = FocusSelection::new();
        assert!(focus.toggle(LifeArea::Career));
        assert!(focus.contains(LifeArea::Career));
        assert!(!focus.toggle(LifeArea::Career));
        assert!(focus.is_empty());
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut focus: FocusSelection = [LifeArea::Finances].into_iter().collect();
        let before = focus.clone();
        focus.toggle(LifeArea::Growth);
        focus.toggle(LifeArea::Growth);
        assert_eq!(focus, before);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut focus = FocusSelection::new();
        focus.toggle(LifeArea::Environment);
        focus.toggle(LifeArea::Physical);
        focus.toggle(LifeArea::Career);
        assert_eq!(
            focus.as_slice(),
            &[LifeArea::Environment, LifeArea::Physical, LifeArea::Career]
        );
    }

    #[test]
    fn reselecting_moves_area_to_end() {
        let mut focus = FocusSelection::new();
        focus.toggle(LifeArea::Mental);
        focus.toggle(LifeArea::Career);
        focus.toggle(LifeArea::Mental);
        focus.toggle(LifeArea::Mental);
        assert_eq!(focus.as_slice(), &[LifeArea::Career, LifeArea::Mental]);
    }

    #[test]
    fn from_iter_drops_duplicates() {
        let focus: FocusSelection = [LifeArea::Growth, LifeArea::Growth, LifeArea::Mental]
            .into_iter()
            .collect();
        assert_eq!(focus.len(), 2);
    }
}
