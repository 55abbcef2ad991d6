//! HTML quote renderer
//!
//! The page is self-contained with embedded CSS. Course names are escaped by
//! the template engine.

use crate::core::report::{QuoteContext, QuoteView, ReportGenerator};
use askama::Template;
use std::error::Error;

#[derive(Template)]
#[template(path = "quote.html")]
struct HtmlTemplate<'a> {
    view: &'a QuoteView,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &QuoteContext) -> Result<String, Box<dyn Error>> {
        let view = ctx.view();
        Ok(HtmlTemplate { view: &view }.render()?)
    }
}
