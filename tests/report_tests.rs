//! Integration tests for quote rendering

use etn_enrollment::report::{QuoteContext, QuoteFormat, ReportGenerator};
use etn_enrollment::{Catalog, FeeBreakdown, Selection};
use tempfile::TempDir;

fn quote(catalog: &Catalog, ids: &[&str]) -> FeeBreakdown {
    let mut selection = Selection::new(catalog);
    for id in ids {
        selection.select(id).expect("known course");
    }
    selection.quote().expect("priced")
}

#[test]
fn test_text_quote_with_discount() {
    let catalog = Catalog::builtin();
    let breakdown = quote(&catalog, &["first_aid", "sewing"]);
    let ctx = QuoteContext::new(&breakdown, "R");

    let out = QuoteFormat::Text.reporter().render(&ctx).expect("rendered");

    assert!(out.contains("First Aid: R 1500.00"));
    assert!(out.contains("2 courses"));
    assert!(out.contains("Subtotal (excl. VAT):  R 3000.00"));
    assert!(out.contains("VAT (15%):             R 450.00"));
    assert!(out.contains("Total Before Discount: R 3450.00"));
    assert!(out.contains("Discount (5%)"));
    assert!(out.contains("-R 172.50"));
    assert!(out.contains("Total Amount Due:      R 3277.50"));
    assert!(out.contains("You save: R 172.50"));
}

#[test]
fn test_single_course_hides_discount() {
    let catalog = Catalog::builtin();
    let breakdown = quote(&catalog, &["cooking"]);
    let ctx = QuoteContext::new(&breakdown, "R");

    for format in [QuoteFormat::Text, QuoteFormat::Markdown, QuoteFormat::Html] {
        let out = format.reporter().render(&ctx).expect("rendered");
        assert!(!out.contains("Discount ("), "{format} shows a discount row");
        assert!(!out.contains("You save"), "{format} shows savings");
        assert!(out.contains("R 862.50"), "{format} misses the total");
    }
}

#[test]
fn test_markdown_and_html_quotes() {
    let catalog = Catalog::builtin();
    let breakdown = quote(&catalog, &["first_aid", "sewing", "cooking"]);
    let ctx = QuoteContext::new(&breakdown, "R");

    let md = QuoteFormat::Markdown.reporter().render(&ctx).expect("rendered");
    assert!(md.contains("Cooking"));
    assert!(md.contains("Discount (10%)"));
    assert!(md.contains("R 3881.25"));

    let html = QuoteFormat::Html.reporter().render(&ctx).expect("rendered");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<td>Sewing</td>"));
    assert!(html.contains("R 431.25"));
    assert!(html.contains("R 3881.25"));
}

#[test]
fn test_currency_symbol_is_configurable() {
    let catalog = Catalog::builtin();
    let breakdown = quote(&catalog, &["first_aid"]);
    let ctx = QuoteContext::new(&breakdown, "ZAR");

    let out = QuoteFormat::Text.reporter().render(&ctx).expect("rendered");
    assert!(out.contains("ZAR 1725.00"));
}

#[test]
fn test_generate_writes_file() {
    let catalog = Catalog::builtin();
    let breakdown = quote(&catalog, &["first_aid", "sewing"]);
    let ctx = QuoteContext::new(&breakdown, "R");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir
        .path()
        .join(format!("quote.{}", QuoteFormat::Markdown.extension()));

    QuoteFormat::Markdown
        .reporter()
        .generate(&ctx, &path)
        .expect("written");

    let written = std::fs::read_to_string(&path).expect("readable");
    assert!(written.contains("R 3277.50"));
}
