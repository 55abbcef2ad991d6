//! Quote report generation
//!
//! Renders a [`FeeBreakdown`] as plain text, Markdown or HTML. Templates live
//! under `templates/` and are compiled in with askama.

pub mod formats;

use crate::core::fees::FeeBreakdown;
use rust_decimal::{Decimal, RoundingStrategy};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, QuoteFormat, TextReporter};

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY: &str = "R";

/// Format an amount to two decimal places, e.g. `R 3277.50`
///
/// Midpoints round away from zero. Formatting is the only place amounts are
/// rounded.
#[must_use]
pub fn format_money(currency: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency} {rounded:.2}")
}

/// Data needed to render one quote
#[derive(Debug, Clone, Copy)]
pub struct QuoteContext<'a> {
    /// Breakdown being reported
    pub breakdown: &'a FeeBreakdown,
    /// Currency symbol prefixed to amounts
    pub currency: &'a str,
}

impl<'a> QuoteContext<'a> {
    /// Create a new quote context
    #[must_use]
    pub const fn new(breakdown: &'a FeeBreakdown, currency: &'a str) -> Self {
        Self {
            breakdown,
            currency,
        }
    }

    /// Format an amount with this context's currency
    #[must_use]
    pub fn money(&self, amount: Decimal) -> String {
        format_money(self.currency, amount)
    }

    /// "1 course" / "3 courses"
    #[must_use]
    pub fn course_count_label(&self) -> String {
        let count = self.breakdown.selected_count;
        if count == 1 {
            "1 course".to_string()
        } else {
            format!("{count} courses")
        }
    }

    /// Pre-formatted values shared by every template
    #[must_use]
    pub fn view(&self) -> QuoteView {
        let b = self.breakdown;
        QuoteView {
            lines: b
                .lines
                .iter()
                .map(|line| QuoteLineView {
                    name: line.name.clone(),
                    price: self.money(line.price),
                })
                .collect(),
            course_count: self.course_count_label(),
            subtotal: self.money(b.subtotal),
            vat: self.money(b.vat_amount),
            pre_discount_total: self.money(b.pre_discount_total()),
            has_discount: b.has_discount(),
            discount_label: format!("Discount ({}%)", b.discount_percent()),
            discount: self.money(b.discount_amount),
            total: self.money(b.total_amount),
        }
    }
}

/// One course row as rendered
#[derive(Debug, Clone)]
pub struct QuoteLineView {
    /// Course name
    pub name: String,
    /// Formatted price
    pub price: String,
}

/// Formatted quote values handed to templates
#[derive(Debug, Clone)]
pub struct QuoteView {
    /// Course rows
    pub lines: Vec<QuoteLineView>,
    /// e.g. "2 courses"
    pub course_count: String,
    /// Subtotal excluding VAT
    pub subtotal: String,
    /// VAT amount
    pub vat: String,
    /// Subtotal plus VAT
    pub pre_discount_total: String,
    /// Whether the discount rows should be shown
    pub has_discount: bool,
    /// e.g. "Discount (5%)"
    pub discount_label: String,
    /// Discount amount
    pub discount: String,
    /// Amount due
    pub total: String,
}

/// Trait for quote report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &QuoteContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if template rendering fails
    fn render(&self, ctx: &QuoteContext) -> Result<String, Box<dyn Error>>;
}
