//! Courses command handler

use etn_enrollment::models::{Catalog, DurationCategory};
use etn_enrollment::report::format_money;

/// Print the catalog grouped by duration category
pub fn run(catalog: &Catalog, currency: &str) {
    for duration in [DurationCategory::SixMonth, DurationCategory::SixWeek] {
        let mut courses = catalog.courses_in(duration).peekable();
        if courses.peek().is_none() {
            continue;
        }

        println!("\n=== {} ===\n", duration.heading());
        for course in courses {
            println!(
                "  {:<20} {:<20} {:<9} {}",
                course.id,
                course.name,
                course.duration,
                format_money(currency, course.price)
            );
        }
    }
}
