//! Full-profile estimation
//!
//! Runs the five calculators over one survey profile and aggregates the
//! results. Batch estimation fans profiles out over the rayon pool when the
//! `parallel` feature is enabled; the calculators share nothing but the
//! constant factor tables, so no coordination is needed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::breakdown::{compute_breakdown, Breakdown};
use crate::emissions::{
    consumption_emissions, energy_emissions, personal_emissions, travel_emissions,
    waste_emissions, CategoryResult, ConsumptionInput, ConsumptionResult, EnergyInput,
    EnergyResult, PersonalInput, PersonalResult, TravelInput, TravelResult, WasteInput,
    WasteResult,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One person's survey answers, one record per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintProfile {
    pub personal: PersonalInput,
    pub travel: TravelInput,
    pub waste: WasteInput,
    pub energy: EnergyInput,
    pub consumption: ConsumptionInput,
}

/// Detailed results for every category plus the aggregated breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintReport {
    pub personal: PersonalResult,
    pub travel: TravelResult,
    pub waste: WasteResult,
    pub energy: EnergyResult,
    pub consumption: ConsumptionResult,
    pub breakdown: Breakdown,
    /// Rounded sum of the breakdown (kg CO₂/month)
    pub prediction: i64,
}

/// Estimate one profile
pub fn estimate(profile: &FootprintProfile) -> FootprintReport {
    let personal = personal_emissions(&profile.personal);
    let travel = travel_emissions(&profile.travel);
    let waste = waste_emissions(&profile.waste);
    let energy = energy_emissions(&profile.energy);
    let consumption = consumption_emissions(&profile.consumption);

    for (category, total) in [
        personal.breakdown_entry(),
        travel.breakdown_entry(),
        waste.breakdown_entry(),
        energy.breakdown_entry(),
        consumption.breakdown_entry(),
    ] {
        debug!(%category, total = *total, "Category total");
    }

    let breakdown = compute_breakdown(&personal, &travel, &waste, &energy, &consumption);
    let prediction = breakdown.prediction();

    info!(prediction, largest = %breakdown.largest(), "Footprint estimated");

    FootprintReport {
        personal,
        travel,
        waste,
        energy,
        consumption,
        breakdown,
        prediction,
    }
}

/// Estimate many profiles, preserving input order
pub fn estimate_batch(profiles: &[FootprintProfile]) -> Vec<FootprintReport> {
    info!(count = profiles.len(), "Estimating footprint batch");
    estimate_all(profiles)
}

#[cfg(feature = "parallel")]
fn estimate_all(profiles: &[FootprintProfile]) -> Vec<FootprintReport> {
    profiles.par_iter().map(estimate).collect()
}

#[cfg(not(feature = "parallel"))]
fn estimate_all(profiles: &[FootprintProfile]) -> Vec<FootprintReport> {
    profiles.iter().map(estimate).collect()
}
