//! Enrollment inquiry validation
//!
//! Validation is a pure function from [`InquiryForm`] to [`InquiryOutcome`].
//! Every failing field is reported at once so the whole form can be fixed in
//! one pass.

use crate::core::models::{ContactInquiry, InquiryField, InquiryForm, MessageType};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Minimum message length after trimming, counted in Unicode scalar values
/// (`char`s), so an emoji counts once rather than as two UTF-16 units
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,}$").unwrap());

/// Field-scoped validation messages, ordered as the form is laid out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<InquiryField, String>);

impl FieldErrors {
    fn insert(&mut self, field: InquiryField, message: &str) {
        self.0.insert(field, message.to_string());
    }

    /// Message for one field, if it failed
    #[must_use]
    pub fn get(&self, field: InquiryField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` failed
    #[must_use]
    pub fn contains(&self, field: InquiryField) -> bool {
        self.0.contains_key(&field)
    }

    /// Number of failing fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field failed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Failing fields and their messages in form order
    pub fn iter(&self) -> impl Iterator<Item = (InquiryField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Please fix the following errors:")?;
        for (_, message) in self.iter() {
            writeln!(f, "• {message}")?;
        }
        Ok(())
    }
}

/// Result of validating an inquiry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryOutcome {
    /// Every rule passed
    Valid(ContactInquiry),
    /// At least one field failed
    Invalid(FieldErrors),
}

impl InquiryOutcome {
    /// Whether the form was accepted
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a `Result`
    ///
    /// # Errors
    /// Returns the field errors when the form was rejected
    pub fn into_result(self) -> Result<ContactInquiry, FieldErrors> {
        match self {
            Self::Valid(inquiry) => Ok(inquiry),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Validate raw inquiry input
///
/// Rules:
/// - full name must be non-empty after trimming
/// - email must be non-empty and shaped like `local@domain.tld`
/// - phone is optional; when given it may hold digits, spaces, `+`, `-` and
///   parentheses, at least ten of them
/// - message must be at least ten characters after trimming
#[must_use]
pub fn validate(form: &InquiryForm) -> InquiryOutcome {
    let mut errors = FieldErrors::default();

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.insert(InquiryField::FullName, "Full name is required");
    }

    let email = form.email.trim();
    if email.is_empty() {
        errors.insert(InquiryField::Email, "Email address is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(InquiryField::Email, "Please enter a valid email address");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.insert(InquiryField::Message, "Message is required");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(
            InquiryField::Message,
            "Message should be at least 10 characters long",
        );
    }

    // The pattern sees the raw value; only the stored copy is trimmed
    let phone = form.phone.trim();
    if !phone.is_empty() && !PHONE_RE.is_match(&form.phone) {
        errors.insert(InquiryField::Phone, "Please enter a valid phone number");
    }

    if !errors.is_empty() {
        tracing::debug!(failed = errors.len(), "inquiry rejected");
        return InquiryOutcome::Invalid(errors);
    }

    let message_type = parse_message_type(&form.message_type);

    InquiryOutcome::Valid(ContactInquiry {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone: (!phone.is_empty()).then(|| phone.to_string()),
        course_interests: form.course_interests.clone(),
        message_type,
        message: message.to_string(),
    })
}

/// Empty means unset; an unrecognised category is dropped rather than rejected
fn parse_message_type(raw: &str) -> Option<MessageType> {
    if raw.trim().is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(kind) => Some(kind),
        Err(err) => {
            tracing::warn!("{err}; treating inquiry type as unset");
            None
        }
    }
}
