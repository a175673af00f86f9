//! Consumption emissions: showers, groceries and clothing

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryResult;
use crate::core_types::{round2, Category, KgCo2PerMonth, LookupTable};

/// kg CO₂ per monetary unit of grocery spend
pub const GROCERY_KG_PER_UNIT: f64 = 0.1;

/// kg CO₂ per clothing item bought
pub const CLOTHES_KG_PER_ITEM: f64 = 10.0;

/// Hot-water emissions by shower frequency (kg CO₂/month)
pub static SHOWER_KG_PER_MONTH: LookupTable<f64> = LookupTable::new(
    "shower_freq",
    &[
        ("less frequently", 30.0),
        ("daily", 90.0),
        ("twice a day", 120.0),
        ("more frequently", 150.0),
    ],
    "daily",
);

/// Survey answers for the consumption category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionInput {
    pub shower_freq: String,
    /// Monthly grocery spend in local currency units
    pub grocery_spend: f64,
    pub clothes_per_month: u32,
}

impl Default for ConsumptionInput {
    fn default() -> Self {
        Self {
            shower_freq: "daily".to_string(),
            grocery_spend: 200.0,
            clothes_per_month: 5,
        }
    }
}

impl ConsumptionInput {
    pub fn new(shower_freq: impl Into<String>, grocery_spend: f64, clothes_per_month: u32) -> Self {
        Self {
            shower_freq: shower_freq.into(),
            grocery_spend,
            clothes_per_month,
        }
    }
}

/// Consumption estimate with every intermediate term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionResult {
    pub shower_freq: String,
    pub grocery_spend: f64,
    pub clothes_per_month: u32,
    pub shower_kg_month: KgCo2PerMonth,
    pub groceries_kg_month: KgCo2PerMonth,
    pub clothes_kg_month: KgCo2PerMonth,
    pub total_consumption_kg_month: KgCo2PerMonth,
}

impl CategoryResult for ConsumptionResult {
    const CATEGORY: Category = Category::Consumption;

    fn total(&self) -> KgCo2PerMonth {
        self.total_consumption_kg_month
    }
}

/// Estimate consumption monthly emissions
pub fn consumption_emissions(input: &ConsumptionInput) -> ConsumptionResult {
    let shower = SHOWER_KG_PER_MONTH.resolve(&input.shower_freq);
    let groceries_kg = input.grocery_spend * GROCERY_KG_PER_UNIT;
    let clothes_kg = f64::from(input.clothes_per_month) * CLOTHES_KG_PER_ITEM;

    let total = shower + groceries_kg + clothes_kg;

    debug!(shower, groceries_kg, clothes_kg, total, "Consumption emissions");

    ConsumptionResult {
        shower_freq: input.shower_freq.clone(),
        grocery_spend: input.grocery_spend,
        clothes_per_month: input.clothes_per_month,
        shower_kg_month: KgCo2PerMonth::new(shower),
        groceries_kg_month: KgCo2PerMonth::new(round2(groceries_kg)),
        clothes_kg_month: KgCo2PerMonth::new(clothes_kg),
        total_consumption_kg_month: KgCo2PerMonth::new(round2(total)),
    }
}
