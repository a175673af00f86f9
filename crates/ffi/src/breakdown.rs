//! C ABI over the breakdown aggregator and summary helpers.

use carbon_footprint_core::{trees_owed, Breakdown, Category, KgCo2PerMonth};
use tracing::debug;

use crate::calculators::{
    CarbonConsumptionResult, CarbonEnergyResult, CarbonPersonalResult, CarbonTravelResult,
    CarbonWasteResult,
};
use crate::error::{CarbonErrorCode, DefaultCarbonError};
use crate::helpers::{ref_from_ptr, write_out};

/// Category totals in display order (kg CO₂/month) and the rounded prediction.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonBreakdown {
    pub personal: f64,
    pub travel: f64,
    pub waste: f64,
    pub energy: f64,
    pub consumption: f64,
    /// Sum of the five totals rounded to a whole kg.
    pub prediction: i64,
}

impl From<&Breakdown> for CarbonBreakdown {
    fn from(breakdown: &Breakdown) -> Self {
        Self {
            personal: *breakdown[Category::Personal],
            travel: *breakdown[Category::Travel],
            waste: *breakdown[Category::Waste],
            energy: *breakdown[Category::Energy],
            consumption: *breakdown[Category::Consumption],
            prediction: breakdown.prediction(),
        }
    }
}

unsafe fn breakdown_from_results(
    personal: *const CarbonPersonalResult,
    travel: *const CarbonTravelResult,
    waste: *const CarbonWasteResult,
    energy: *const CarbonEnergyResult,
    consumption: *const CarbonConsumptionResult,
) -> Result<CarbonBreakdown, DefaultCarbonError> {
    let entries = unsafe {
        [
            (Category::Personal, ref_from_ptr(personal, "personal")?.total_kg_month),
            (Category::Travel, ref_from_ptr(travel, "travel")?.total_kg_month),
            (Category::Waste, ref_from_ptr(waste, "waste")?.total_kg_month),
            (Category::Energy, ref_from_ptr(energy, "energy")?.total_kg_month),
            (Category::Consumption, ref_from_ptr(consumption, "consumption")?.total_kg_month),
        ]
    };

    let breakdown = Breakdown::from_entries(
        entries
            .into_iter()
            .map(|(category, total)| (category, KgCo2PerMonth::new(total))),
    )?;
    debug!(prediction = breakdown.prediction(), "FFI breakdown computed");

    Ok(CarbonBreakdown::from(&breakdown))
}

/// Aggregate the five category results into a breakdown and prediction.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_breakdown` written
/// - `CarbonErrorCode::NullPointer` if any pointer is null
/// - `CarbonErrorCode::InvalidBreakdown` if a total is NaN or infinite
///
/// # Safety
/// Every result pointer must point to a valid, initialised record and
/// `out_breakdown` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_compute_breakdown(
    personal: *const CarbonPersonalResult,
    travel: *const CarbonTravelResult,
    waste: *const CarbonWasteResult,
    energy: *const CarbonEnergyResult,
    consumption: *const CarbonConsumptionResult,
    out_breakdown: *mut CarbonBreakdown,
) -> CarbonErrorCode {
    let result = unsafe { breakdown_from_results(personal, travel, waste, energy, consumption) };
    unsafe { write_out(out_breakdown, "out_breakdown", result) }
}

/// Number of trees needed to offset a monthly prediction.
#[no_mangle]
pub extern "C" fn carbon_trees_owed(prediction: i64) -> i64 {
    trees_owed(prediction)
}
