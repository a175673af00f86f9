//! Breakdown aggregation
//!
//! Collects the five category totals into a fixed-order mapping and derives
//! the headline prediction from it.

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::ops::Index;

use crate::core_types::{round_whole, Category, KgCo2PerMonth};
use crate::emissions::{
    CategoryResult, ConsumptionResult, EnergyResult, PersonalResult, TravelResult, WasteResult,
};
use crate::error::BreakdownError;

/// Category totals in breakdown order (Personal, Travel, Waste, Energy,
/// Consumption). Serializes as an ordered map keyed by category name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    totals: [KgCo2PerMonth; 5],
}

impl Breakdown {
    /// Build from totals given in breakdown order
    pub fn from_totals(totals: [KgCo2PerMonth; 5]) -> Self {
        Self { totals }
    }

    /// Build from loose `(category, total)` entries in any order.
    ///
    /// # Errors
    /// Fails when a category is missing or repeated, or a total is not finite.
    pub fn from_entries<I>(entries: I) -> Result<Self, BreakdownError>
    where
        I: IntoIterator<Item = (Category, KgCo2PerMonth)>,
    {
        let mut seen: FxHashMap<Category, KgCo2PerMonth> = FxHashMap::default();
        for (category, total) in entries {
            if !total.is_finite() {
                return Err(BreakdownError::NonFiniteTotal {
                    category,
                    value: *total,
                });
            }
            if seen.insert(category, total).is_some() {
                return Err(BreakdownError::DuplicateCategory(category));
            }
        }

        let mut totals = [KgCo2PerMonth::ZERO; 5];
        for category in Category::ALL {
            totals[category.index()] = *seen
                .get(&category)
                .ok_or(BreakdownError::MissingCategory(category))?;
        }
        Ok(Self { totals })
    }

    /// Total for one category
    pub fn get(&self, category: Category) -> KgCo2PerMonth {
        self.totals[category.index()]
    }

    /// `(category, total)` pairs in breakdown order
    pub fn entries(&self) -> impl Iterator<Item = (Category, KgCo2PerMonth)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Unrounded sum of all category totals
    pub fn sum(&self) -> KgCo2PerMonth {
        self.totals.iter().sum()
    }

    /// Headline prediction: the sum rounded to a whole kg (ties to even)
    pub fn prediction(&self) -> i64 {
        round_whole(*self.sum())
    }

    /// Category with the largest total (first one on ties)
    pub fn largest(&self) -> Category {
        self.entries()
            .fold((Category::Personal, KgCo2PerMonth::new(f64::NEG_INFINITY)), |best, entry| {
                if entry.1 > best.1 {
                    entry
                } else {
                    best
                }
            })
            .0
    }
}

impl Index<Category> for Breakdown {
    type Output = KgCo2PerMonth;

    fn index(&self, category: Category) -> &KgCo2PerMonth {
        &self.totals[category.index()]
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len()))?;
        for (category, total) in self.entries() {
            map.serialize_entry(category.name(), &total)?;
        }
        map.end()
    }
}

/// Aggregate the five category results into a breakdown
pub fn compute_breakdown(
    personal: &PersonalResult,
    travel: &TravelResult,
    waste: &WasteResult,
    energy: &EnergyResult,
    consumption: &ConsumptionResult,
) -> Breakdown {
    Breakdown::from_totals([
        personal.total(),
        travel.total(),
        waste.total(),
        energy.total(),
        consumption.total(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kg(values: [f64; 5]) -> [KgCo2PerMonth; 5] {
        values.map(KgCo2PerMonth::new)
    }

    #[test]
    fn test_order_and_prediction() {
        let breakdown = Breakdown::from_totals(kg([10.0, 20.0, 30.0, 40.0, 50.0]));

        let names: Vec<&str> = breakdown.entries().map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["Personal", "Travel", "Waste", "Energy", "Consumption"]);
        assert_eq!(breakdown[Category::Waste], 30.0);
        assert_eq!(breakdown.prediction(), 150);
        assert_eq!(breakdown.largest(), Category::Consumption);
    }

    #[test]
    fn test_from_entries_reorders() {
        let breakdown = Breakdown::from_entries([
            (Category::Consumption, KgCo2PerMonth::new(50.0)),
            (Category::Travel, KgCo2PerMonth::new(20.0)),
            (Category::Energy, KgCo2PerMonth::new(40.0)),
            (Category::Personal, KgCo2PerMonth::new(10.0)),
            (Category::Waste, KgCo2PerMonth::new(30.0)),
        ])
        .unwrap();
        assert_eq!(breakdown, Breakdown::from_totals(kg([10.0, 20.0, 30.0, 40.0, 50.0])));
    }

    #[test]
    fn test_from_entries_rejects_contract_violations() {
        let missing = Breakdown::from_entries([(Category::Personal, KgCo2PerMonth::new(1.0))]);
        assert_eq!(missing, Err(BreakdownError::MissingCategory(Category::Travel)));

        let duplicate = Breakdown::from_entries([
            (Category::Waste, KgCo2PerMonth::new(1.0)),
            (Category::Waste, KgCo2PerMonth::new(2.0)),
        ]);
        assert_eq!(duplicate, Err(BreakdownError::DuplicateCategory(Category::Waste)));

        let nan = Breakdown::from_entries([(Category::Energy, KgCo2PerMonth::new(f64::NAN))]);
        assert!(matches!(
            nan,
            Err(BreakdownError::NonFiniteTotal { category: Category::Energy, .. })
        ));
    }

    #[test]
    fn test_prediction_rounds_ties_to_even() {
        let breakdown = Breakdown::from_totals(kg([100.25, 0.25, 0.0, 0.0, 0.0]));
        assert_eq!(breakdown.prediction(), 100);
        let breakdown = Breakdown::from_totals(kg([101.0, 0.5, 0.0, 0.0, 0.0]));
        assert_eq!(breakdown.prediction(), 102);
    }
}
