//! Category calculators
//!
//! Each calculator is a pure function from one survey input record to a
//! result record that echoes the inputs, exposes every intermediate term and
//! carries a rounded monthly total. No calculator depends on another.

pub mod consumption;
pub mod energy;
pub mod personal;
pub mod travel;
pub mod waste;

use crate::core_types::{Category, KgCo2PerMonth};

pub use consumption::{consumption_emissions, ConsumptionInput, ConsumptionResult};
pub use energy::{energy_emissions, primary_cooking_system, EnergyInput, EnergyResult};
pub use personal::{calc_bmr, personal_emissions, PersonalInput, PersonalResult};
pub use travel::{flights_per_month_from_frequency, travel_emissions, TravelInput, TravelResult};
pub use waste::{recycles_any, waste_emissions, WasteInput, WasteResult};

/// A per-category result that contributes one total to the breakdown
pub trait CategoryResult {
    /// Category this result belongs to
    const CATEGORY: Category;

    /// Rounded monthly total
    fn total(&self) -> KgCo2PerMonth;

    /// `(category, total)` pair as it appears in the breakdown
    fn breakdown_entry(&self) -> (Category, KgCo2PerMonth) {
        (Self::CATEGORY, self.total())
    }
}
