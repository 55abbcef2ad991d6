//! Inquire command handler

use etn_enrollment::models::{interest_label, Catalog, InquiryForm};
use etn_enrollment::report::format_money;
use etn_enrollment::{validate, InquiryOutcome, Selection};
use tracing::info;

/// Raw inquiry fields as given on the command line
pub struct InquiryArgs<'a> {
    /// Full name
    pub name: &'a str,
    /// Email address
    pub email: &'a str,
    /// Phone number, may be empty
    pub phone: &'a str,
    /// Interest values
    pub interests: &'a [String],
    /// Inquiry type key, may be empty
    pub kind: &'a str,
    /// Message
    pub message: &'a str,
    /// Course ids of a quote forwarded from the calculator
    pub quote: &'a [String],
}

/// Run the inquire command.
///
/// # Errors
/// Returns the field error panel when validation fails.
pub fn run(args: &InquiryArgs, catalog: &Catalog, currency: &str) -> Result<(), String> {
    let mut form = InquiryForm {
        full_name: args.name.to_string(),
        email: args.email.to_string(),
        phone: args.phone.to_string(),
        message_type: args.kind.to_string(),
        message: args.message.to_string(),
        ..InquiryForm::default()
    };
    for interest in args.interests {
        if !form.course_interests.contains(interest) {
            form.toggle_interest(interest);
        }
        if interest_label(catalog, interest).is_none() {
            tracing::warn!(interest = %interest, "interest is not a known course");
        }
    }

    let inquiry = match validate(&form) {
        InquiryOutcome::Valid(inquiry) => inquiry,
        InquiryOutcome::Invalid(errors) => return Err(errors.to_string()),
    };

    println!("✓ Message Sent Successfully!");
    println!("{}", inquiry.acknowledgement());
    println!("Interested in: {}", form.interest_summary(catalog));
    if let Some(kind) = inquiry.message_type {
        println!("Inquiry type: {kind}");
    }

    if !args.quote.is_empty() {
        let mut selection = Selection::new(catalog);
        for id in args.quote {
            if let Err(e) = selection.select(id) {
                tracing::warn!("skipping quoted course: {e}");
            }
        }
        // The quote is context only, so a failed calculation just omits it
        if let Ok(breakdown) = selection.quote() {
            let handoff = breakdown.handoff();
            println!(
                "Regarding your quote of {} for: {}",
                format_money(currency, handoff.calculated_amount),
                handoff.selected_courses.join(", ")
            );
        }
    }

    info!(
        interests = inquiry.course_interests.len(),
        has_phone = inquiry.phone.is_some(),
        "inquiry accepted"
    );
    Ok(())
}
