//! Quote command handler
//!
//! Builds a selection from course ids (and an optional loosely matched course
//! name), prices it and renders the breakdown.

use etn_enrollment::config::Config;
use etn_enrollment::report::{QuoteContext, QuoteFormat};
use etn_enrollment::{Catalog, FeeError, Selection};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};

/// Options for one quote run
pub struct QuoteRequest<'a> {
    /// Course ids to select
    pub courses: &'a [String],
    /// Course name to preselect, matched loosely
    pub preselect: Option<&'a str>,
    /// Output format; config default when `None`
    pub format: Option<&'a str>,
    /// Output file; stdout when `None`
    pub output: Option<&'a Path>,
    /// Also write into the configured quotes directory
    pub save: bool,
}

/// Run the quote command.
///
/// # Errors
/// Returns a printable message when a course id is unknown, nothing is
/// selected, or the quote cannot be rendered or written.
pub fn run(
    request: &QuoteRequest,
    catalog: &Catalog,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let format = match request.format {
        Some(raw) => QuoteFormat::from_str(raw).map_err(|e| format!("✗ {e}"))?,
        None => config.quote_format(),
    };

    let mut selection = Selection::new(catalog);
    if let Some(name) = request.preselect {
        if selection.preselect(name) == 0 && verbose {
            println!("No course named '{name}'; nothing preselected");
        }
    }
    for id in request.courses {
        selection
            .select(id)
            .map_err(|e| format!("✗ {e}. Run `etn courses` to see valid ids."))?;
    }

    let breakdown = selection.quote().map_err(|e| match e {
        FeeError::NoSelection => format!("✗ No Courses Selected. {e}"),
        FeeError::UnknownCourse(_) => format!("✗ {e}"),
    })?;

    let ctx = QuoteContext::new(&breakdown, config.currency());
    let reporter = format.reporter();
    let rendered = reporter.render(&ctx).map_err(|e| {
        error!("Quote rendering failed: {e}");
        format!("✗ Failed to render quote: {e}")
    })?;

    if let Some(path) = request.output {
        write_quote(path, &rendered)?;
        println!("✓ Quote written: {}", path.display());
    } else {
        println!("{rendered}");
    }

    if request.save {
        let path = saved_quote_path(config, &selection.selected_names(), format);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create quotes directory {}: {e}", parent.display())
            })?;
        }
        write_quote(&path, &rendered)?;
        println!("✓ Quote saved: {}", path.display());
    }

    info!(
        courses = breakdown.selected_count,
        total = %breakdown.total_amount,
        "quote produced"
    );
    Ok(())
}

fn write_quote(path: &Path, content: &str) -> Result<(), String> {
    fs::write(path, content).map_err(|e| {
        error!("Failed to write quote {}: {e}", path.display());
        format!("✗ Failed to write {}: {e}", path.display())
    })
}

/// `<quotes_dir>/quote-first-aid-sewing.<ext>`
fn saved_quote_path(config: &Config, names: &[String], format: QuoteFormat) -> PathBuf {
    let slug = names
        .iter()
        .map(|n| n.to_lowercase().replace(char::is_whitespace, "-"))
        .collect::<Vec<_>>()
        .join("-");
    let dir = if config.paths.quotes_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.quotes_dir)
    };
    dir.join(format!("quote-{slug}.{}", format.extension()))
}
