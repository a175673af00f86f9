//! C ABI for the carbon footprint estimator.
//!
//! Every function returns a [`CarbonErrorCode`] and writes its result through
//! an out-pointer. On failure the message is available from
//! [`carbon_get_last_error`] on the same thread. All functions are pure and
//! may be called from any thread without coordination.

mod breakdown;
mod calculators;
mod error;
mod helpers;

pub use breakdown::{carbon_compute_breakdown, carbon_trees_owed, CarbonBreakdown};
pub use calculators::{
    carbon_consumption_emissions, carbon_energy_emissions, carbon_personal_emissions,
    carbon_travel_emissions, carbon_waste_emissions,
};
pub use calculators::{
    CarbonConsumptionInput, CarbonConsumptionResult, CarbonEnergyInput, CarbonEnergyResult,
    CarbonPersonalInput, CarbonPersonalResult, CarbonTravelInput, CarbonTravelResult,
    CarbonWasteInput, CarbonWasteResult,
};
pub use error::{carbon_get_last_error, carbon_get_last_error_code, CarbonErrorCode};
