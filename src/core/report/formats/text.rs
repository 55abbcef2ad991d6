//! Plain text quote renderer

use crate::core::report::{QuoteContext, QuoteView, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "quote.txt")]
struct TextTemplate<'a> {
    view: &'a QuoteView,
}

/// Plain text reporter for terminal output
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &QuoteContext) -> Result<String, Box<dyn Error>> {
        let view = ctx.view();
        Ok(TextTemplate { view: &view }.render()?)
    }
}
