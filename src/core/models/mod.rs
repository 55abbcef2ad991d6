//! Data models for the course catalog and enrollment inquiries

pub mod catalog;
pub mod course;
pub mod inquiry;

pub use catalog::Catalog;
pub use course::{Course, CourseId, DurationCategory};
pub use inquiry::{
    interest_label, ContactInquiry, InquiryField, InquiryForm, MessageType, ALL_COURSES, NOT_SURE,
};
