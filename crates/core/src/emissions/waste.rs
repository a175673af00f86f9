//! Waste emissions: bag size, bag count and recycling

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryResult;
use crate::core_types::{round2, Category, KeyNormalization, KgCo2PerMonth, LookupTable};

/// Weeks per month used to scale weekly bag counts
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Multiplier applied when the household recycles
pub const RECYCLE_MULTIPLIER: f64 = 0.8;

/// kg CO₂ per bag of landfill waste, keyed by bag size with spaces removed
pub static WASTE_KG_PER_BAG: LookupTable<f64> = LookupTable::new(
    "waste_size",
    &[
        ("small", 5.0),
        ("medium", 8.0),
        ("large", 12.0),
        ("extralarge", 15.0),
    ],
    "medium",
)
.with_normalization(KeyNormalization::StripWhitespace);

/// Whether any recycled material was selected in the survey
pub fn recycles_any<S: AsRef<str>>(materials: &[S]) -> bool {
    materials.iter().any(|m| !m.as_ref().trim().is_empty())
}

/// Survey answers for the waste category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteInput {
    pub waste_size: String,
    pub bags_per_week: f64,
    pub recycle: bool,
}

impl Default for WasteInput {
    fn default() -> Self {
        Self {
            waste_size: "medium".to_string(),
            bags_per_week: 2.0,
            recycle: false,
        }
    }
}

impl WasteInput {
    pub fn new(waste_size: impl Into<String>, bags_per_week: f64, recycle: bool) -> Self {
        Self {
            waste_size: waste_size.into(),
            bags_per_week,
            recycle,
        }
    }
}

/// Waste estimate with every intermediate term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteResult {
    pub waste_size: String,
    pub bags_per_week: f64,
    pub monthly_bags: f64,
    pub recycle: bool,
    pub per_bag_kg_co2: f64,
    pub recycle_multiplier: f64,
    pub total_waste_kg_month: KgCo2PerMonth,
}

impl CategoryResult for WasteResult {
    const CATEGORY: Category = Category::Waste;

    fn total(&self) -> KgCo2PerMonth {
        self.total_waste_kg_month
    }
}

/// Estimate waste monthly emissions
pub fn waste_emissions(input: &WasteInput) -> WasteResult {
    let per_bag_kg = WASTE_KG_PER_BAG.resolve(&input.waste_size);

    let monthly_bags = input.bags_per_week * WEEKS_PER_MONTH;
    let recycle_multiplier = if input.recycle { RECYCLE_MULTIPLIER } else { 1.0 };
    let total = monthly_bags * per_bag_kg * recycle_multiplier;

    debug!(monthly_bags, per_bag_kg, total, "Waste emissions");

    WasteResult {
        waste_size: input.waste_size.clone(),
        bags_per_week: input.bags_per_week,
        monthly_bags,
        recycle: input.recycle,
        per_bag_kg_co2: per_bag_kg,
        recycle_multiplier,
        total_waste_kg_month: KgCo2PerMonth::new(round2(total)),
    }
}
