//! Core types and utilities

pub mod category;
pub mod lookup;
pub mod units;

pub use category::Category;
pub use lookup::{KeyNormalization, LookupTable};
pub use units::*;
