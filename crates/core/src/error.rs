//! Caller-contract errors
//!
//! The calculators never fail: unknown categorical answers resolve to table
//! defaults. The only error condition is a breakdown assembled from loose
//! `(category, total)` entries that does not hold exactly one finite total per
//! category.

use thiserror::Error;

use crate::core_types::Category;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakdownError {
    #[error("breakdown is missing the {0} total")]
    MissingCategory(Category),

    #[error("breakdown lists the {0} total more than once")]
    DuplicateCategory(Category),

    #[error("{category} total must be a finite number, got {value}")]
    NonFiniteTotal { category: Category, value: f64 },
}
