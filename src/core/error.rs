//! Error types for catalog, selection and fee calculation

use crate::core::models::CourseId;
use thiserror::Error;

/// Failures while building or loading a course catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two catalog entries share an identifier
    #[error("duplicate course id '{0}' in catalog")]
    DuplicateCourse(CourseId),

    /// A catalog entry has a price below zero
    #[error("course '{id}' has a negative price")]
    NegativePrice {
        /// Offending course
        id: CourseId,
    },

    /// The prices of all courses plus VAT exceed the representable range
    #[error("course prices are too large to calculate fees for")]
    PriceOutOfRange,

    /// The catalog has no courses at all
    #[error("catalog contains no courses")]
    EmptyCatalog,

    /// The catalog file is not valid TOML or does not match the schema
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog file could not be read
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Rejected selection changes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The identifier does not name a catalog course
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
}

/// Reasons the fee engine refuses to produce a breakdown
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    /// No course was selected
    #[error("Please select at least one course to calculate fees.")]
    NoSelection,

    /// A selected identifier is absent from the catalog
    #[error("unknown course '{0}'")]
    UnknownCourse(String),
}

impl From<SelectionError> for FeeError {
    fn from(value: SelectionError) -> Self {
        match value {
            SelectionError::UnknownCourse(id) => Self::UnknownCourse(id),
        }
    }
}
