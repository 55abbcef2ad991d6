//! Enrollment inquiry model

use super::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Interest value meaning "every course"
pub const ALL_COURSES: &str = "all_courses";

/// Interest value meaning "needs guidance choosing"
pub const NOT_SURE: &str = "not_sure";

/// Category of an inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Admission information
    Admission,
    /// Course pricing
    Pricing,
    /// Course schedule
    Schedule,
    /// Partnership opportunity
    Partnership,
    /// Anything else
    Other,
}

impl MessageType {
    /// Every category in display order
    pub const ALL: [Self; 5] = [
        Self::Admission,
        Self::Pricing,
        Self::Schedule,
        Self::Partnership,
        Self::Other,
    ];

    /// Key used in raw form input
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Admission => "admission",
            Self::Pricing => "pricing",
            Self::Schedule => "schedule",
            Self::Partnership => "partnership",
            Self::Other => "other",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admission => "Admission Information",
            Self::Pricing => "Course Pricing",
            Self::Schedule => "Course Schedule",
            Self::Partnership => "Partnership Opportunity",
            Self::Other => "Other",
        }
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.value().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown inquiry type: {s}"))
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields of the inquiry form that can carry a validation error
///
/// Ordering follows the form layout, so errors list top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InquiryField {
    /// Full name
    FullName,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Message body
    Message,
}

impl InquiryField {
    /// Form key of the field
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for InquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw, unvalidated inquiry form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryForm {
    /// Full name as typed
    pub full_name: String,
    /// Email address as typed
    pub email: String,
    /// Phone number as typed; may be empty
    pub phone: String,
    /// Interest values (course ids, `all_courses` or `not_sure`)
    pub course_interests: BTreeSet<String>,
    /// Inquiry category key; empty means unset
    pub message_type: String,
    /// Message as typed
    pub message: String,
}

impl InquiryForm {
    /// Flip membership of an interest value. Returns `true` if it is now selected.
    pub fn toggle_interest(&mut self, value: &str) -> bool {
        if self.course_interests.remove(value) {
            false
        } else {
            self.course_interests.insert(value.to_string());
            true
        }
    }

    /// Short description of the chosen interests
    ///
    /// # Examples
    /// ```
    /// use etn_enrollment::models::{Catalog, InquiryForm};
    ///
    /// let catalog = Catalog::builtin();
    /// let mut form = InquiryForm::default();
    /// assert_eq!(form.interest_summary(&catalog), "No courses selected");
    /// form.toggle_interest("sewing");
    /// assert_eq!(form.interest_summary(&catalog), "Sewing");
    /// form.toggle_interest("cooking");
    /// assert_eq!(form.interest_summary(&catalog), "2 courses selected");
    /// ```
    #[must_use]
    pub fn interest_summary(&self, catalog: &Catalog) -> String {
        let mut interests = self.course_interests.iter();
        match (interests.next(), self.course_interests.len()) {
            (None, _) => "No courses selected".to_string(),
            (Some(only), 1) => {
                interest_label(catalog, only).unwrap_or_else(|| "1 course selected".to_string())
            }
            (Some(_), count) => format!("{count} courses selected"),
        }
    }
}

/// Display label of an interest value, if it is recognised
#[must_use]
pub fn interest_label(catalog: &Catalog, value: &str) -> Option<String> {
    match value {
        ALL_COURSES => Some("All Courses".to_string()),
        NOT_SURE => Some("Not Sure Yet".to_string()),
        id => catalog.get_course(id).map(|c| c.name.clone()),
    }
}

/// A validated enrollment inquiry
///
/// Only produced by [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    /// Trimmed, non-empty full name
    pub full_name: String,
    /// Trimmed email address of the form `local@domain.tld`
    pub email: String,
    /// Trimmed phone number, if one was given
    pub phone: Option<String>,
    /// Interest values
    pub course_interests: BTreeSet<String>,
    /// Inquiry category, if chosen
    pub message_type: Option<MessageType>,
    /// Trimmed message of at least ten characters
    pub message: String,
}

impl ContactInquiry {
    /// Confirmation shown once the inquiry is accepted
    #[must_use]
    pub fn acknowledgement(&self) -> String {
        format!(
            "Thank you {}, we will get back to you within 24 hours.",
            self.full_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_parse() {
        assert_eq!("pricing".parse::<MessageType>(), Ok(MessageType::Pricing));
        assert_eq!(
            " Partnership ".parse::<MessageType>(),
            Ok(MessageType::Partnership)
        );
        assert!("refund".parse::<MessageType>().is_err());
    }

    #[test]
    fn test_message_type_labels() {
        assert_eq!(MessageType::Admission.label(), "Admission Information");
        assert_eq!(MessageType::Schedule.to_string(), "Course Schedule");
    }

    #[test]
    fn test_toggle_interest_is_set_semantics() {
        let mut form = InquiryForm::default();

        assert!(form.toggle_interest("first_aid"));
        assert!(!form.toggle_interest("first_aid"));
        assert!(form.course_interests.is_empty());
    }

    #[test]
    fn test_interest_summary_special_values() {
        let catalog = Catalog::builtin();
        let mut form = InquiryForm::default();

        form.toggle_interest(NOT_SURE);
        assert_eq!(form.interest_summary(&catalog), "Not Sure Yet");

        form.toggle_interest(NOT_SURE);
        form.toggle_interest("pottery");
        assert_eq!(form.interest_summary(&catalog), "1 course selected");
    }

    #[test]
    fn test_field_order_follows_form() {
        assert!(InquiryField::FullName < InquiryField::Email);
        assert!(InquiryField::Email < InquiryField::Phone);
        assert!(InquiryField::Phone < InquiryField::Message);
    }
}
