//! Travel emissions: road distance by transport mode plus flights

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryResult;
use crate::core_types::{round2, Category, KgCo2PerMonth, LookupTable};

/// Average emissions of one short/medium-haul flight (kg CO₂)
pub const FLIGHT_KG_PER_FLIGHT: f64 = 250.0;

/// Road emission factor in kg CO₂ per km
pub static TRANSPORT_KG_PER_KM: LookupTable<f64> = LookupTable::new(
    "transport_mode",
    &[
        ("car", 0.20),
        ("motorcycle", 0.12),
        ("bus", 0.08),
        ("train", 0.05),
        ("bike", 0.0),
        ("none", 0.0),
    ],
    "none",
);

/// Coarse "flights last month" survey answers as flight counts
pub static FLIGHT_FREQUENCY: LookupTable<u32> = LookupTable::new(
    "flight_frequency",
    &[
        ("never", 0),
        ("rarely", 1),
        ("frequently", 2),
        ("very frequently", 3),
    ],
    "never",
);

/// Convert a coarse flight-frequency answer into flights per month
pub fn flights_per_month_from_frequency(answer: &str) -> u32 {
    FLIGHT_FREQUENCY.resolve(answer)
}

/// Survey answers for the travel category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelInput {
    pub transport_mode: String,
    pub monthly_km: f64,
    pub flights_per_month: u32,
}

impl Default for TravelInput {
    fn default() -> Self {
        Self {
            transport_mode: "none".to_string(),
            monthly_km: 0.0,
            flights_per_month: 0,
        }
    }
}

impl TravelInput {
    pub fn new(transport_mode: impl Into<String>, monthly_km: f64, flights_per_month: u32) -> Self {
        Self {
            transport_mode: transport_mode.into(),
            monthly_km,
            flights_per_month,
        }
    }
}

/// Travel estimate with every intermediate term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelResult {
    pub transport_mode: String,
    pub monthly_km: f64,
    pub flights_per_month: u32,
    pub road_kg_month: KgCo2PerMonth,
    pub flights_kg_month: KgCo2PerMonth,
    pub total_travel_kg_month: KgCo2PerMonth,
}

impl CategoryResult for TravelResult {
    const CATEGORY: Category = Category::Travel;

    fn total(&self) -> KgCo2PerMonth {
        self.total_travel_kg_month
    }
}

/// Estimate travel monthly emissions.
///
/// An empty or unrecognised transport mode counts as `none` (no road
/// emissions); flights are still counted.
pub fn travel_emissions(input: &TravelInput) -> TravelResult {
    let km_factor = TRANSPORT_KG_PER_KM.resolve(&input.transport_mode);

    let road_kg_month = input.monthly_km * km_factor;
    let flights_kg_month = f64::from(input.flights_per_month) * FLIGHT_KG_PER_FLIGHT;
    let total = road_kg_month + flights_kg_month;

    debug!(road_kg_month, flights_kg_month, total, "Travel emissions");

    TravelResult {
        transport_mode: input.transport_mode.clone(),
        monthly_km: input.monthly_km,
        flights_per_month: input.flights_per_month,
        road_kg_month: KgCo2PerMonth::new(round2(road_kg_month)),
        flights_kg_month: KgCo2PerMonth::new(round2(flights_kg_month)),
        total_travel_kg_month: KgCo2PerMonth::new(round2(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::lookup::assert_default_present;

    #[test]
    fn test_tables_have_defaults() {
        assert_default_present(&TRANSPORT_KG_PER_KM);
        assert_default_present(&FLIGHT_FREQUENCY);
    }

    #[test]
    fn test_car_and_flights() {
        let result = travel_emissions(&TravelInput::new("Car", 500.0, 2));
        assert_eq!(result.road_kg_month, 100.0);
        assert_eq!(result.flights_kg_month, 500.0);
        assert_eq!(result.total(), 600.0);
        assert_eq!(result.transport_mode, "Car");
    }

    #[test]
    fn test_unknown_mode_is_none() {
        let starship = travel_emissions(&TravelInput::new("starship", 0.0, 0));
        let none = travel_emissions(&TravelInput::new("none", 0.0, 0));
        assert_eq!(starship.total(), none.total());
        assert_eq!(starship.total(), 0.0);

        let empty = travel_emissions(&TravelInput::new("", 1200.0, 1));
        assert_eq!(empty.road_kg_month, 0.0);
        assert_eq!(empty.total(), 250.0);
    }

    #[test]
    fn test_flight_frequency_answers() {
        assert_eq!(flights_per_month_from_frequency("never"), 0);
        assert_eq!(flights_per_month_from_frequency("Rarely"), 1);
        assert_eq!(flights_per_month_from_frequency("very frequently"), 3);
        assert_eq!(flights_per_month_from_frequency("weekly"), 0);
    }
}
