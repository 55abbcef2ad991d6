//! Core module: catalog, selection, fee engine, inquiry validation and reports

pub mod config;
pub mod error;
pub mod fees;
pub mod models;
pub mod report;
pub mod selection;
pub mod validation;

pub use error::{CatalogError, FeeError, SelectionError};
pub use fees::{calculate, FeeBreakdown, QuoteHandoff};
pub use models::{Catalog, ContactInquiry, Course, CourseId, InquiryForm};
pub use selection::Selection;
pub use validation::{validate, FieldErrors, InquiryOutcome};

/// Returns the current version of the `etn-enrollment` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
