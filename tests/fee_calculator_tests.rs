//! Integration tests for the fee engine against the built-in catalog

use etn_enrollment::fees::{discount_rate_for, VAT_RATE};
use etn_enrollment::{calculate, Catalog, CourseId, FeeError};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

fn ids(values: &[&str]) -> BTreeSet<CourseId> {
    values.iter().map(|&v| CourseId::from(v)).collect()
}

fn dec(value: &str) -> Decimal {
    value.parse().expect("valid decimal literal")
}

#[test]
fn test_single_course_has_no_discount() {
    let catalog = Catalog::builtin();
    let breakdown = calculate(&catalog, &ids(&["first_aid"])).expect("priced");

    assert_eq!(breakdown.selected_count, 1);
    assert_eq!(breakdown.subtotal, dec("1500"));
    assert_eq!(breakdown.vat_amount, dec("225"));
    assert_eq!(breakdown.discount_rate, Decimal::ZERO);
    assert_eq!(breakdown.discount_amount, Decimal::ZERO);
    assert_eq!(breakdown.total_amount, dec("1725"));
    assert!(!breakdown.has_discount());
}

#[test]
fn test_two_six_month_courses() {
    let catalog = Catalog::builtin();
    let breakdown = calculate(&catalog, &ids(&["first_aid", "sewing"])).expect("priced");

    assert_eq!(breakdown.subtotal, dec("3000"));
    assert_eq!(breakdown.vat_amount, dec("450"));
    assert_eq!(breakdown.pre_discount_total(), dec("3450"));
    assert_eq!(breakdown.discount_rate, dec("0.05"));
    assert_eq!(breakdown.discount_amount, dec("172.5"));
    assert_eq!(breakdown.total_amount, dec("3277.5"));
    assert_eq!(breakdown.savings(), dec("172.5"));
}

#[test]
fn test_three_courses_mixed_durations() {
    let catalog = Catalog::builtin();
    let breakdown =
        calculate(&catalog, &ids(&["first_aid", "sewing", "cooking"])).expect("priced");

    assert_eq!(breakdown.subtotal, dec("3750"));
    assert_eq!(breakdown.vat_amount, dec("562.5"));
    assert_eq!(breakdown.discount_amount, dec("431.25"));
    assert_eq!(breakdown.total_amount, dec("3881.25"));
    assert_eq!(breakdown.discount_percent(), dec("10"));
}

#[test]
fn test_every_course_gets_top_tier() {
    let catalog = Catalog::builtin();
    let all: BTreeSet<CourseId> = catalog
        .list_courses()
        .iter()
        .map(|c| c.id.clone())
        .collect();

    let breakdown = calculate(&catalog, &all).expect("priced");

    assert_eq!(breakdown.selected_count, 7);
    assert_eq!(breakdown.subtotal, dec("8250"));
    assert_eq!(breakdown.discount_rate, dec("0.15"));
    assert_eq!(breakdown.total_amount, dec("8064.375"));
}

#[test]
fn test_lines_follow_catalog_order() {
    let catalog = Catalog::builtin();
    let breakdown =
        calculate(&catalog, &ids(&["garden_maintenance", "sewing", "child_minding"]))
            .expect("priced");

    let names: Vec<&str> = breakdown.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Sewing", "Child Minding", "Garden Maintenance"]);
}

#[test]
fn test_empty_selection_is_rejected() {
    let catalog = Catalog::builtin();
    let err = calculate(&catalog, &BTreeSet::new()).unwrap_err();

    assert_eq!(err, FeeError::NoSelection);
    assert_eq!(
        err.to_string(),
        "Please select at least one course to calculate fees."
    );
}

#[test]
fn test_unknown_course_is_rejected() {
    let catalog = Catalog::builtin();
    let err = calculate(&catalog, &ids(&["sewing", "pottery"])).unwrap_err();

    assert_eq!(err, FeeError::UnknownCourse("pottery".to_string()));
}

#[test]
fn test_tiers_never_decrease() {
    let rates: Vec<Decimal> = (1..=10).map(discount_rate_for).collect();
    assert!(rates.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(discount_rate_for(4), discount_rate_for(10));
}

/// Walks every non-empty subset of the built-in catalog
#[test]
fn test_breakdown_identities_hold_for_every_selection() {
    let catalog = Catalog::builtin();
    let courses = catalog.list_courses();
    let subsets = 1u32 << courses.len();

    for mask in 1..subsets {
        let selected: BTreeSet<CourseId> = courses
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << *i) != 0)
            .map(|(_, c)| c.id.clone())
            .collect();

        let b = calculate(&catalog, &selected).expect("priced");
        let price_sum: Decimal = b.lines.iter().map(|l| l.price).sum();

        assert_eq!(b.selected_count, selected.len());
        assert_eq!(b.subtotal, price_sum);
        assert_eq!(b.vat_amount, b.subtotal * VAT_RATE);
        assert_eq!(
            b.discount_amount,
            (b.subtotal + b.vat_amount) * discount_rate_for(selected.len())
        );
        assert_eq!(
            b.total_amount,
            b.subtotal + b.vat_amount - b.discount_amount
        );
        assert!(b.total_amount <= b.pre_discount_total());
        assert!(b.total_amount >= Decimal::ZERO);
    }
}

#[test]
fn test_handoff_carries_total_and_names() {
    let catalog = Catalog::builtin();
    let breakdown = calculate(&catalog, &ids(&["first_aid", "child_minding"])).expect("priced");

    let handoff = breakdown.handoff();
    assert_eq!(handoff.calculated_amount, breakdown.total_amount);
    assert_eq!(handoff.selected_courses, ["First Aid", "Child Minding"]);
}
