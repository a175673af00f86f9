//! Energy emissions: heating source, cooking, device efficiency and screen time

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryResult;
use crate::core_types::{round2, Category, KgCo2PerMonth, LookupTable};

/// Days per month used to scale daily screen hours
pub const DAYS_PER_MONTH: f64 = 30.0;

/// kg CO₂ per hour of PC/TV use
pub const PC_KG_PER_HOUR: f64 = 0.05;

/// kg CO₂ per hour of internet use
pub const INTERNET_KG_PER_HOUR: f64 = 0.03;

/// Baseline household energy use by heating source (kg CO₂/month)
pub static ENERGY_BASE_MONTHLY: LookupTable<f64> = LookupTable::new(
    "power_source",
    &[
        ("natural gas", 120.0),
        ("electricity", 180.0),
        ("wood", 90.0),
        ("coal", 300.0),
    ],
    "electricity",
);

/// Cooking appliance emissions (kg CO₂/month)
pub static COOKING_SYSTEM_KG: LookupTable<f64> = LookupTable::new(
    "cooking_system",
    &[
        ("microwave", 15.0),
        ("oven", 30.0),
        ("grill", 40.0),
        ("airfryer", 20.0),
        ("stove", 25.0),
    ],
    "stove",
);

/// Multiplier for energy-efficient devices
pub static EFFICIENCY_MULTIPLIER: LookupTable<f64> = LookupTable::new(
    "efficient_devices",
    &[("yes", 0.9), ("sometimes", 1.0), ("no", 1.1)],
    "sometimes",
);

/// The cooking system used for the estimate when several are selected:
/// the first one listed, or the table default when none is.
pub fn primary_cooking_system<S: AsRef<str>>(systems: &[S]) -> String {
    systems.first().map_or_else(
        || COOKING_SYSTEM_KG.default_key().to_string(),
        |s| s.as_ref().to_string(),
    )
}

/// Survey answers for the energy category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyInput {
    pub power_source: String,
    pub cooking_system: String,
    pub efficient_devices: String,
    pub pc_hours_per_day: f64,
    pub internet_hours_per_day: f64,
}

impl Default for EnergyInput {
    fn default() -> Self {
        Self {
            power_source: "electricity".to_string(),
            cooking_system: "stove".to_string(),
            efficient_devices: "sometimes".to_string(),
            pc_hours_per_day: 5.0,
            internet_hours_per_day: 6.0,
        }
    }
}

impl EnergyInput {
    pub fn new(
        power_source: impl Into<String>,
        cooking_system: impl Into<String>,
        efficient_devices: impl Into<String>,
        pc_hours_per_day: f64,
        internet_hours_per_day: f64,
    ) -> Self {
        Self {
            power_source: power_source.into(),
            cooking_system: cooking_system.into(),
            efficient_devices: efficient_devices.into(),
            pc_hours_per_day,
            internet_hours_per_day,
        }
    }
}

/// Energy estimate with every intermediate term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyResult {
    pub power_source: String,
    pub cooking_system: String,
    pub efficient_devices: String,
    pub pc_hours_per_day: f64,
    pub internet_hours_per_day: f64,
    pub base_kg_month: KgCo2PerMonth,
    pub cooking_kg_month: KgCo2PerMonth,
    pub efficiency_multiplier: f64,
    pub pc_kg_month: KgCo2PerMonth,
    pub internet_kg_month: KgCo2PerMonth,
    pub total_energy_kg_month: KgCo2PerMonth,
}

impl CategoryResult for EnergyResult {
    const CATEGORY: Category = Category::Energy;

    fn total(&self) -> KgCo2PerMonth {
        self.total_energy_kg_month
    }
}

/// Estimate energy monthly emissions.
///
/// The efficiency multiplier scales heating and cooking only; screen time is
/// added on top.
pub fn energy_emissions(input: &EnergyInput) -> EnergyResult {
    let base = ENERGY_BASE_MONTHLY.resolve(&input.power_source);
    let cooking = COOKING_SYSTEM_KG.resolve(&input.cooking_system);
    let eff_mult = EFFICIENCY_MULTIPLIER.resolve(&input.efficient_devices);

    let pc_kg = input.pc_hours_per_day * DAYS_PER_MONTH * PC_KG_PER_HOUR;
    let internet_kg = input.internet_hours_per_day * DAYS_PER_MONTH * INTERNET_KG_PER_HOUR;

    let total = (base + cooking) * eff_mult + pc_kg + internet_kg;

    debug!(base, cooking, eff_mult, pc_kg, internet_kg, total, "Energy emissions");

    EnergyResult {
        power_source: input.power_source.clone(),
        cooking_system: input.cooking_system.clone(),
        efficient_devices: input.efficient_devices.clone(),
        pc_hours_per_day: input.pc_hours_per_day,
        internet_hours_per_day: input.internet_hours_per_day,
        base_kg_month: KgCo2PerMonth::new(base),
        cooking_kg_month: KgCo2PerMonth::new(cooking),
        efficiency_multiplier: eff_mult,
        pc_kg_month: KgCo2PerMonth::new(round2(pc_kg)),
        internet_kg_month: KgCo2PerMonth::new(round2(internet_kg)),
        total_energy_kg_month: KgCo2PerMonth::new(round2(total)),
    }
}
