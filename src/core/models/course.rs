//! Course model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a course (e.g., `first_aid`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Create a course identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CourseId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CourseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// How long a course runs. Informational only, never used in fee math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationCategory {
    /// Six month professional course
    SixMonth,
    /// Six week short course
    SixWeek,
}

impl DurationCategory {
    /// Display label used on course listings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SixMonth => "6 Months",
            Self::SixWeek => "6 Weeks",
        }
    }

    /// Heading used when listing every course of this category
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::SixMonth => "Six Month Professional Courses",
            Self::SixWeek => "Six Week Short Courses",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, never reused for a different course
    pub id: CourseId,

    /// Display label (e.g., "Child Minding")
    pub name: String,

    /// Duration category
    pub duration: DurationCategory,

    /// Fee in the base currency, excluding VAT
    pub price: Decimal,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Stable course identifier
    /// * `name` - Display name
    /// * `duration` - Duration category
    /// * `price` - Fee excluding VAT
    #[must_use]
    pub fn new(
        id: impl Into<CourseId>,
        name: impl Into<String>,
        duration: DurationCategory,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            price,
        }
    }

    /// Name with all whitespace removed and lower-cased, used for loose lookups
    #[must_use]
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lower-case a name and strip every whitespace character from it
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "child_minding",
            "Child Minding",
            DurationCategory::SixWeek,
            Decimal::new(750, 0),
        );

        assert_eq!(course.id.as_str(), "child_minding");
        assert_eq!(course.name, "Child Minding");
        assert_eq!(course.duration, DurationCategory::SixWeek);
        assert_eq!(course.price, Decimal::new(750, 0));
    }

    #[test]
    fn test_name_key_strips_all_whitespace() {
        let course = Course::new(
            "garden_maintenance",
            "Garden  Maintenance\t",
            DurationCategory::SixWeek,
            Decimal::new(750, 0),
        );

        assert_eq!(course.name_key(), "gardenmaintenance");
    }

    #[test]
    fn test_duration_labels() {
        assert_eq!(DurationCategory::SixMonth.label(), "6 Months");
        assert_eq!(DurationCategory::SixWeek.to_string(), "6 Weeks");
    }

    #[test]
    fn test_course_id_borrows_as_str() {
        use std::collections::BTreeSet;

        let mut ids = BTreeSet::new();
        ids.insert(CourseId::new("sewing"));
        assert!(ids.contains("sewing"));
    }
}
