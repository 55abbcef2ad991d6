//! Per-session course selection state

use crate::core::error::{FeeError, SelectionError};
use crate::core::fees::{self, FeeBreakdown};
use crate::core::models::{Catalog, Course, CourseId};
use std::collections::BTreeSet;

/// The set of courses chosen in one calculator session
///
/// Each session owns its own `Selection`; the catalog is only borrowed.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    catalog: &'a Catalog,
    chosen: BTreeSet<CourseId>,
}

impl<'a> Selection<'a> {
    /// Start an empty selection over `catalog`
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            chosen: BTreeSet::new(),
        }
    }

    /// The catalog this selection draws from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Flip membership of a course
    ///
    /// # Returns
    /// `true` if the course is selected after the call
    ///
    /// # Errors
    /// Returns [`SelectionError::UnknownCourse`] if `course_id` is not in the catalog
    pub fn toggle(&mut self, course_id: &str) -> Result<bool, SelectionError> {
        let course = self.lookup(course_id)?;
        let selected = if self.chosen.remove(course_id) {
            false
        } else {
            self.chosen.insert(course.id.clone());
            true
        };
        tracing::debug!(course = course_id, selected, "selection toggled");
        Ok(selected)
    }

    /// Add a course; selecting an already chosen course changes nothing
    ///
    /// # Errors
    /// Returns [`SelectionError::UnknownCourse`] if `course_id` is not in the catalog
    pub fn select(&mut self, course_id: &str) -> Result<(), SelectionError> {
        let course = self.lookup(course_id)?;
        self.chosen.insert(course.id.clone());
        Ok(())
    }

    /// Select every course whose name loosely matches `name`
    ///
    /// Matching ignores case and whitespace, so `"childminding"` and
    /// `"Child Minding"` both pick the Child Minding course. A miss is a no-op.
    ///
    /// # Returns
    /// Number of courses that matched
    pub fn preselect(&mut self, name: &str) -> usize {
        let catalog = self.catalog;
        let mut matched = 0;
        for course in catalog.find_by_name(name) {
            self.chosen.insert(course.id.clone());
            matched += 1;
        }
        if matched == 0 {
            tracing::debug!(name, "preselected course not found in catalog");
        }
        matched
    }

    /// Clear the selection
    pub fn reset(&mut self) {
        self.chosen.clear();
    }

    /// Number of selected courses
    #[must_use]
    pub fn count(&self) -> usize {
        self.chosen.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Whether `course_id` is selected
    #[must_use]
    pub fn is_selected(&self, course_id: &str) -> bool {
        self.chosen.contains(course_id)
    }

    /// The selected identifiers
    #[must_use]
    pub const fn selected_ids(&self) -> &BTreeSet<CourseId> {
        &self.chosen
    }

    /// Selected courses in catalog order
    #[must_use]
    pub fn selected_courses(&self) -> Vec<&'a Course> {
        let catalog = self.catalog;
        catalog
            .list_courses()
            .iter()
            .filter(|c| self.chosen.contains(&c.id))
            .collect()
    }

    /// Display names of the selected courses in catalog order
    #[must_use]
    pub fn selected_names(&self) -> Vec<String> {
        self.selected_courses()
            .into_iter()
            .map(|c| c.name.clone())
            .collect()
    }

    /// Price the current selection
    ///
    /// # Errors
    /// Returns [`FeeError::NoSelection`] if nothing is selected
    pub fn quote(&self) -> Result<FeeBreakdown, FeeError> {
        fees::calculate(self.catalog, &self.chosen)
    }

    fn lookup(&self, course_id: &str) -> Result<&'a Course, SelectionError> {
        let catalog = self.catalog;
        catalog
            .get_course(course_id)
            .ok_or_else(|| SelectionError::UnknownCourse(course_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_pair_restores_membership() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);
        selection.select("sewing").unwrap();

        for course in catalog.list_courses() {
            let before = selection.is_selected(course.id.as_str());
            selection.toggle(course.id.as_str()).unwrap();
            assert_ne!(selection.is_selected(course.id.as_str()), before);
            selection.toggle(course.id.as_str()).unwrap();
            assert_eq!(selection.is_selected(course.id.as_str()), before);
        }
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_toggle_unknown_course_is_rejected() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);

        assert_eq!(
            selection.toggle("welding"),
            Err(SelectionError::UnknownCourse("welding".to_string()))
        );
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_is_idempotent() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);

        selection.select("cooking").unwrap();
        selection.select("cooking").unwrap();
        assert_eq!(selection.count(), 1);
    }

    #[test]
    fn test_preselect_matches_loose_names() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);

        assert_eq!(selection.preselect("lifeskills"), 1);
        assert_eq!(selection.preselect("FIRST AID"), 1);
        assert_eq!(selection.preselect("welding"), 0);

        assert!(selection.is_selected("life_skills"));
        assert!(selection.is_selected("first_aid"));
        assert_eq!(selection.count(), 2);
    }

    #[test]
    fn test_preselect_does_not_deselect() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);

        selection.select("cooking").unwrap();
        selection.preselect("cooking");
        assert!(selection.is_selected("cooking"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);
        selection.select("cooking").unwrap();
        selection.select("sewing").unwrap();

        selection.reset();
        assert!(selection.is_empty());
        assert_eq!(selection.quote(), Err(FeeError::NoSelection));
    }

    #[test]
    fn test_selected_courses_follow_catalog_order() {
        let catalog = Catalog::builtin();
        let mut selection = Selection::new(&catalog);
        selection.select("garden_maintenance").unwrap();
        selection.select("first_aid").unwrap();
        selection.select("cooking").unwrap();

        assert_eq!(
            selection.selected_names(),
            ["First Aid", "Cooking", "Garden Maintenance"]
        );
    }
}
