//! Markdown quote renderer
//!
//! Produces a fee table that renders in GitHub, GitLab and most chat clients.

use crate::core::report::{QuoteContext, QuoteView, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "quote.md")]
struct MarkdownTemplate<'a> {
    view: &'a QuoteView,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &QuoteContext) -> Result<String, Box<dyn Error>> {
        let view = ctx.view();
        Ok(MarkdownTemplate { view: &view }.render()?)
    }
}
