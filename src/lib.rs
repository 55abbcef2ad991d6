//! Course catalog, fee calculation and enrollment inquiry validation for
//! Empowering the Nation skills training.
//!
//! The library is synchronous and side-effect free apart from loading
//! catalogs and configuration from disk. Each calculator session owns its own
//! [`Selection`]; the [`Catalog`] is shared read-only.
//!
//! ```
//! use etn_enrollment::{Catalog, Selection};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::builtin();
//! let mut selection = Selection::new(&catalog);
//! selection.toggle("first_aid").unwrap();
//! selection.toggle("sewing").unwrap();
//!
//! let breakdown = selection.quote().unwrap();
//! assert_eq!(breakdown.total_amount, Decimal::new(32775, 1));
//! ```

pub mod core;

pub use crate::core::*;
