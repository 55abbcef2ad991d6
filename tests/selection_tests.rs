//! Integration tests for per-session course selection

use etn_enrollment::{Catalog, FeeError, Selection, SelectionError};
use rust_decimal::Decimal;

#[test]
fn test_toggle_twice_restores_selection() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);

    assert_eq!(selection.toggle("cooking"), Ok(true));
    assert!(selection.is_selected("cooking"));
    assert_eq!(selection.toggle("cooking"), Ok(false));
    assert!(selection.is_empty());
}

#[test]
fn test_unknown_course_leaves_selection_untouched() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);
    selection.select("sewing").expect("known course");

    assert_eq!(
        selection.toggle("pottery"),
        Err(SelectionError::UnknownCourse("pottery".to_string()))
    );
    assert!(selection.select("pottery").is_err());
    assert_eq!(selection.count(), 1);
}

#[test]
fn test_select_is_idempotent() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);

    selection.select("landscaping").expect("known course");
    selection.select("landscaping").expect("known course");
    assert_eq!(selection.count(), 1);
}

#[test]
fn test_preselect_ignores_case_and_spaces() {
    let catalog = Catalog::builtin();

    for name in ["childminding", "Child Minding", "  CHILD  minding "] {
        let mut selection = Selection::new(&catalog);
        assert_eq!(selection.preselect(name), 1, "{name:?} should match");
        assert!(selection.is_selected("child_minding"));
    }
}

#[test]
fn test_preselect_miss_is_noop() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);
    selection.select("first_aid").expect("known course");

    assert_eq!(selection.preselect("basket weaving"), 0);
    assert_eq!(selection.preselect(""), 0);
    assert_eq!(selection.selected_names(), ["First Aid"]);
}

#[test]
fn test_sessions_are_independent() {
    let catalog = Catalog::builtin();
    let mut first = Selection::new(&catalog);
    let mut second = Selection::new(&catalog);

    first.select("sewing").expect("known course");
    second.select("cooking").expect("known course");
    second.select("first_aid").expect("known course");

    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 2);
    assert!(!first.is_selected("cooking"));
}

#[test]
fn test_selected_courses_in_catalog_order() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);
    for id in ["garden_maintenance", "first_aid", "cooking"] {
        selection.toggle(id).expect("known course");
    }

    assert_eq!(
        selection.selected_names(),
        ["First Aid", "Cooking", "Garden Maintenance"]
    );
}

#[test]
fn test_quote_and_reset() {
    let catalog = Catalog::builtin();
    let mut selection = Selection::new(&catalog);

    assert_eq!(selection.quote(), Err(FeeError::NoSelection));

    selection.toggle("first_aid").expect("known course");
    selection.toggle("sewing").expect("known course");
    let breakdown = selection.quote().expect("priced");
    assert_eq!(breakdown.total_amount, Decimal::new(32775, 1));

    selection.reset();
    assert!(selection.is_empty());
    assert_eq!(selection.quote(), Err(FeeError::NoSelection));
}
