//! Course catalog model

use super::course::{normalize_name, Course, CourseId, DurationCategory};
use crate::core::error::CatalogError;
use crate::core::fees::VAT_RATE;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog bundled with the crate
const BUILTIN_CATALOG: &str = include_str!("../../../assets/catalog.toml");

/// On-disk catalog layout: a list of `[[courses]]` tables
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    courses: Vec<Course>,
}

/// The fixed, read-only list of offered courses
///
/// Built once and shared by reference with every selection and calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Courses in definition order
    courses: Vec<Course>,

    /// Position of each course in `courses`, keyed by id
    index: HashMap<CourseId, usize>,
}

impl Catalog {
    /// Create a catalog from a list of courses
    ///
    /// Every selection must be priceable without overflow, so the sum of all
    /// prices including VAT has to fit in a `Decimal`.
    ///
    /// # Errors
    /// Returns an error if the list is empty, an id repeats, a price is
    /// negative, or the prices are too large to total
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        if courses.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(courses.len());
        for (position, course) in courses.iter().enumerate() {
            if course.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: course.id.clone(),
                });
            }
            if index.insert(course.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
        }

        let gross = courses
            .iter()
            .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.price))
            .and_then(|subtotal| subtotal.checked_mul(Decimal::ONE + VAT_RATE));
        if gross.is_none() {
            return Err(CatalogError::PriceOutOfRange);
        }

        Ok(Self { courses, index })
    }

    /// Parse a catalog from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or the courses are invalid
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        Self::new(file.courses)
    }

    /// Load a catalog from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            courses = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog compiled into the crate
    ///
    /// # Panics
    /// Panics if the embedded catalog is invalid. It is covered by tests, so this
    /// cannot happen in a released build.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml(BUILTIN_CATALOG).expect("Failed to parse compiled-in course catalog")
    }

    /// All courses in definition order
    #[must_use]
    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by id
    #[must_use]
    pub fn get_course(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&position| &self.courses[position])
    }

    /// Whether `id` names a catalog course
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a course in definition order
    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Courses of one duration category, in definition order
    pub fn courses_in(&self, duration: DurationCategory) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.duration == duration)
    }

    /// Courses whose name matches `name`, ignoring case and whitespace
    pub fn find_by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Course> {
        let wanted = normalize_name(name);
        self.courses
            .iter()
            .filter(move |c| !wanted.is_empty() && c.name_key() == wanted)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Always `false`; an empty catalog cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
