//! Fee calculation engine
//!
//! Turns a set of selected course ids into a priced breakdown. VAT is added to
//! the subtotal first and the volume discount is then taken off the VAT
//! inclusive amount:
//!
//! 1. `subtotal` = sum of selected course prices
//! 2. `vat` = `subtotal * 0.15`
//! 3. `discount` = `(subtotal + vat) * rate(count)`
//! 4. `total` = `subtotal + vat - discount`
//!
//! All arithmetic is exact decimal arithmetic; nothing is rounded here.

use crate::core::error::FeeError;
use crate::core::models::{Catalog, CourseId};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// VAT charged on every course fee (15%)
pub const VAT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Discount for two courses (5%)
const TWO_COURSE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Discount for three courses (10%)
const THREE_COURSE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Discount for four or more courses (15%)
const FOUR_PLUS_COURSE_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Volume discount rate for a number of selected courses
///
/// | courses | rate |
/// |---------|------|
/// | 0 or 1  | 0    |
/// | 2       | 0.05 |
/// | 3       | 0.10 |
/// | 4+      | 0.15 |
#[must_use]
pub const fn discount_rate_for(count: usize) -> Decimal {
    match count {
        0 | 1 => Decimal::ZERO,
        2 => TWO_COURSE_RATE,
        3 => THREE_COURSE_RATE,
        _ => FOUR_PLUS_COURSE_RATE,
    }
}

/// One priced course in a breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeLine {
    /// Course id
    pub id: CourseId,
    /// Course name
    pub name: String,
    /// Course fee excluding VAT
    pub price: Decimal,
}

/// Result of pricing one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    /// Priced courses in catalog order
    pub lines: Vec<FeeLine>,
    /// Number of selected courses, at least one
    pub selected_count: usize,
    /// Sum of course prices before VAT
    pub subtotal: Decimal,
    /// VAT on the subtotal
    pub vat_amount: Decimal,
    /// Discount tier applied
    pub discount_rate: Decimal,
    /// Discount taken off the VAT inclusive amount
    pub discount_amount: Decimal,
    /// Amount due
    pub total_amount: Decimal,
}

impl FeeBreakdown {
    /// Subtotal plus VAT, before any discount
    #[must_use]
    pub fn pre_discount_total(&self) -> Decimal {
        self.subtotal + self.vat_amount
    }

    /// Whether a volume discount applies
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_amount > Decimal::ZERO
    }

    /// Amount saved through the volume discount
    #[must_use]
    pub const fn savings(&self) -> Decimal {
        self.discount_amount
    }

    /// Discount rate as a whole percentage (e.g. `10` for 0.10)
    #[must_use]
    pub fn discount_percent(&self) -> Decimal {
        (self.discount_rate * Decimal::ONE_HUNDRED).normalize()
    }

    /// Payload forwarded to the inquiry screen
    #[must_use]
    pub fn handoff(&self) -> QuoteHandoff {
        QuoteHandoff {
            calculated_amount: self.total_amount,
            selected_courses: self.lines.iter().map(|l| l.name.clone()).collect(),
        }
    }
}

/// Quote context carried from the calculator to the inquiry screen
///
/// Display context only; it is never re-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteHandoff {
    /// Total amount due from the breakdown
    pub calculated_amount: Decimal,
    /// Names of the quoted courses
    pub selected_courses: Vec<String>,
}

/// Price a set of selected courses
///
/// # Arguments
/// * `catalog` - Course catalog supplying prices
/// * `selected` - Non-empty set of catalog course ids
///
/// # Errors
/// * [`FeeError::NoSelection`] if `selected` is empty
/// * [`FeeError::UnknownCourse`] if an id is absent from the catalog
pub fn calculate(catalog: &Catalog, selected: &BTreeSet<CourseId>) -> Result<FeeBreakdown, FeeError> {
    if selected.is_empty() {
        return Err(FeeError::NoSelection);
    }

    let mut priced = Vec::with_capacity(selected.len());
    for id in selected {
        let position = catalog
            .position(id.as_str())
            .ok_or_else(|| FeeError::UnknownCourse(id.to_string()))?;
        priced.push(position);
    }
    priced.sort_unstable();

    let lines: Vec<FeeLine> = priced
        .into_iter()
        .map(|position| {
            let course = &catalog.list_courses()[position];
            FeeLine {
                id: course.id.clone(),
                name: course.name.clone(),
                price: course.price,
            }
        })
        .collect();

    let selected_count = lines.len();
    let subtotal: Decimal = lines.iter().map(|l| l.price).sum();
    let vat_amount = subtotal * VAT_RATE;
    let pre_discount_total = subtotal + vat_amount;
    let discount_rate = discount_rate_for(selected_count);
    let discount_amount = pre_discount_total * discount_rate;
    let total_amount = pre_discount_total - discount_amount;

    tracing::debug!(
        selected_count,
        %subtotal,
        %vat_amount,
        %discount_rate,
        %total_amount,
        "fees calculated"
    );

    Ok(FeeBreakdown {
        lines,
        selected_count,
        subtotal,
        vat_amount,
        discount_rate,
        discount_amount,
        total_amount,
    })
}
