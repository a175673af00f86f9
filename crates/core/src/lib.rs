//! Carbon Footprint Core Library
//!
//! Estimates an individual's monthly carbon footprint (kg CO₂/month) from
//! lifestyle survey answers. Five independent category calculators map
//! categorical and numeric answers through fixed factor tables, and an
//! aggregator combines their totals into an ordered breakdown and a rounded
//! headline prediction.
//!
//! The factors are illustrative constants, not a validated emissions model.
//!
//! ```
//! use carbon_footprint_core::{estimate, Category, FootprintProfile};
//!
//! let report = estimate(&FootprintProfile::default());
//! assert_eq!(report.breakdown[Category::Travel], 0.0);
//! assert_eq!(report.prediction, 695);
//! ```

// Core types and utilities
pub mod core_types;

// Category calculators and aggregation
pub mod breakdown;
pub mod emissions;
pub mod error;
pub mod profile;
pub mod summary;

pub use core_types::{Category, KgCo2PerMonth, LookupTable};

pub use emissions::{
    consumption_emissions, energy_emissions, personal_emissions, travel_emissions,
    waste_emissions, CategoryResult,
};
pub use emissions::{ConsumptionInput, EnergyInput, PersonalInput, TravelInput, WasteInput};
pub use emissions::{ConsumptionResult, EnergyResult, PersonalResult, TravelResult, WasteResult};
pub use emissions::{
    flights_per_month_from_frequency, primary_cooking_system, recycles_any,
};

pub use breakdown::{compute_breakdown, Breakdown};
pub use error::BreakdownError;
pub use profile::{estimate, estimate_batch, FootprintProfile, FootprintReport};
pub use summary::{trees_owed, CategoryShare, FootprintSummary};
