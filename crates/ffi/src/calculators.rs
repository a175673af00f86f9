//! C ABI over the five category calculators.
//!
//! Categorical answers are passed as C strings and go through the same
//! lookup-with-default rule as the Rust API: unknown, empty or null answers
//! resolve to the table default and are not reported as errors. Only null
//! record pointers fail.

use carbon_footprint_core::{
    consumption_emissions, energy_emissions, personal_emissions, travel_emissions,
    waste_emissions, CategoryResult, ConsumptionInput, ConsumptionResult, EnergyInput,
    EnergyResult, PersonalInput, PersonalResult, TravelInput, TravelResult, WasteInput,
    WasteResult,
};
use std::os::raw::c_char;

use crate::error::CarbonErrorCode;
use crate::helpers::{answer_from_ptr, ref_from_ptr, write_out};

/// Personal survey answers.
#[repr(C)]
pub struct CarbonPersonalInput {
    /// Height (cm).
    pub height_cm: f64,
    /// Weight (kg).
    pub weight_kg: f64,
    /// `female` or `male`.
    pub gender: *const c_char,
    /// `vegan`, `vegetarian`, `omnivore` or `high-meat`.
    pub diet: *const c_char,
    /// `never`, `sometimes` or `frequent`.
    pub social_activity: *const c_char,
    /// Whether `age` is set; the default age of 25 is used otherwise.
    pub has_age: bool,
    /// Age (years).
    pub age: f64,
}

/// Personal estimate (kg CO₂/month unless noted).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonPersonalResult {
    /// Basal metabolic rate (kcal/day).
    pub bmr: f64,
    pub diet_kg_month: f64,
    pub metabolic_kg_month: f64,
    pub social_multiplier: f64,
    pub total_kg_month: f64,
}

impl From<&PersonalResult> for CarbonPersonalResult {
    fn from(result: &PersonalResult) -> Self {
        Self {
            bmr: result.bmr,
            diet_kg_month: *result.diet_kg_month,
            metabolic_kg_month: *result.metabolic_kg_month,
            social_multiplier: result.social_multiplier,
            total_kg_month: *result.total(),
        }
    }
}

/// Travel survey answers.
#[repr(C)]
pub struct CarbonTravelInput {
    /// `car`, `motorcycle`, `bus`, `train`, `bike` or `none`.
    pub transport_mode: *const c_char,
    pub monthly_km: f64,
    pub flights_per_month: u32,
}

/// Travel estimate (kg CO₂/month).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonTravelResult {
    pub road_kg_month: f64,
    pub flights_kg_month: f64,
    pub total_kg_month: f64,
}

impl From<&TravelResult> for CarbonTravelResult {
    fn from(result: &TravelResult) -> Self {
        Self {
            road_kg_month: *result.road_kg_month,
            flights_kg_month: *result.flights_kg_month,
            total_kg_month: *result.total(),
        }
    }
}

/// Waste survey answers.
#[repr(C)]
pub struct CarbonWasteInput {
    /// `small`, `medium`, `large` or `extra large`.
    pub waste_size: *const c_char,
    pub bags_per_week: f64,
    pub recycle: bool,
}

/// Waste estimate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonWasteResult {
    pub monthly_bags: f64,
    /// kg CO₂ per bag.
    pub per_bag_kg_co2: f64,
    pub recycle_multiplier: f64,
    pub total_kg_month: f64,
}

impl From<&WasteResult> for CarbonWasteResult {
    fn from(result: &WasteResult) -> Self {
        Self {
            monthly_bags: result.monthly_bags,
            per_bag_kg_co2: result.per_bag_kg_co2,
            recycle_multiplier: result.recycle_multiplier,
            total_kg_month: *result.total(),
        }
    }
}

/// Energy survey answers.
#[repr(C)]
pub struct CarbonEnergyInput {
    /// `natural gas`, `electricity`, `wood` or `coal`.
    pub power_source: *const c_char,
    /// `microwave`, `oven`, `grill`, `airfryer` or `stove`.
    pub cooking_system: *const c_char,
    /// `yes`, `sometimes` or `no`.
    pub efficient_devices: *const c_char,
    pub pc_hours_per_day: f64,
    pub internet_hours_per_day: f64,
}

/// Energy estimate (kg CO₂/month).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonEnergyResult {
    pub base_kg_month: f64,
    pub cooking_kg_month: f64,
    pub efficiency_multiplier: f64,
    pub pc_kg_month: f64,
    pub internet_kg_month: f64,
    pub total_kg_month: f64,
}

impl From<&EnergyResult> for CarbonEnergyResult {
    fn from(result: &EnergyResult) -> Self {
        Self {
            base_kg_month: *result.base_kg_month,
            cooking_kg_month: *result.cooking_kg_month,
            efficiency_multiplier: result.efficiency_multiplier,
            pc_kg_month: *result.pc_kg_month,
            internet_kg_month: *result.internet_kg_month,
            total_kg_month: *result.total(),
        }
    }
}

/// Consumption survey answers.
#[repr(C)]
pub struct CarbonConsumptionInput {
    /// `daily`, `twice a day`, `more frequently` or `less frequently`.
    pub shower_freq: *const c_char,
    pub grocery_spend: f64,
    pub clothes_per_month: u32,
}

/// Consumption estimate (kg CO₂/month).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonConsumptionResult {
    pub shower_kg_month: f64,
    pub groceries_kg_month: f64,
    pub clothes_kg_month: f64,
    pub total_kg_month: f64,
}

impl From<&ConsumptionResult> for CarbonConsumptionResult {
    fn from(result: &ConsumptionResult) -> Self {
        Self {
            shower_kg_month: *result.shower_kg_month,
            groceries_kg_month: *result.groceries_kg_month,
            clothes_kg_month: *result.clothes_kg_month,
            total_kg_month: *result.total(),
        }
    }
}

/// Estimate personal emissions.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_result` written
/// - `CarbonErrorCode::NullPointer` if `input` or `out_result` is null
///
/// # Safety
/// `input` must point to a valid `CarbonPersonalInput` whose string fields are
/// null or null-terminated; `out_result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_personal_emissions(
    input: *const CarbonPersonalInput,
    out_result: *mut CarbonPersonalResult,
) -> CarbonErrorCode {
    let result = unsafe { ref_from_ptr(input, "input") }.map(|input| {
        let mut personal = unsafe {
            PersonalInput::new(
                input.height_cm,
                input.weight_kg,
                answer_from_ptr(input.gender),
                answer_from_ptr(input.diet),
                answer_from_ptr(input.social_activity),
            )
        };
        if input.has_age {
            personal = personal.with_age(input.age);
        }
        CarbonPersonalResult::from(&personal_emissions(&personal))
    });

    unsafe { write_out(out_result, "out_result", result) }
}

/// Estimate travel emissions.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_result` written
/// - `CarbonErrorCode::NullPointer` if `input` or `out_result` is null
///
/// # Safety
/// `input` must point to a valid `CarbonTravelInput` whose string field is
/// null or null-terminated; `out_result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_travel_emissions(
    input: *const CarbonTravelInput,
    out_result: *mut CarbonTravelResult,
) -> CarbonErrorCode {
    let result = unsafe { ref_from_ptr(input, "input") }.map(|input| {
        let travel = TravelInput::new(
            unsafe { answer_from_ptr(input.transport_mode) },
            input.monthly_km,
            input.flights_per_month,
        );
        CarbonTravelResult::from(&travel_emissions(&travel))
    });

    unsafe { write_out(out_result, "out_result", result) }
}

/// Estimate waste emissions.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_result` written
/// - `CarbonErrorCode::NullPointer` if `input` or `out_result` is null
///
/// # Safety
/// `input` must point to a valid `CarbonWasteInput` whose string field is
/// null or null-terminated; `out_result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_waste_emissions(
    input: *const CarbonWasteInput,
    out_result: *mut CarbonWasteResult,
) -> CarbonErrorCode {
    let result = unsafe { ref_from_ptr(input, "input") }.map(|input| {
        let waste = WasteInput::new(
            unsafe { answer_from_ptr(input.waste_size) },
            input.bags_per_week,
            input.recycle,
        );
        CarbonWasteResult::from(&waste_emissions(&waste))
    });

    unsafe { write_out(out_result, "out_result", result) }
}

/// Estimate energy emissions.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_result` written
/// - `CarbonErrorCode::NullPointer` if `input` or `out_result` is null
///
/// # Safety
/// `input` must point to a valid `CarbonEnergyInput` whose string fields are
/// null or null-terminated; `out_result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_energy_emissions(
    input: *const CarbonEnergyInput,
    out_result: *mut CarbonEnergyResult,
) -> CarbonErrorCode {
    let result = unsafe { ref_from_ptr(input, "input") }.map(|input| {
        let energy = unsafe {
            EnergyInput::new(
                answer_from_ptr(input.power_source),
                answer_from_ptr(input.cooking_system),
                answer_from_ptr(input.efficient_devices),
                input.pc_hours_per_day,
                input.internet_hours_per_day,
            )
        };
        CarbonEnergyResult::from(&energy_emissions(&energy))
    });

    unsafe { write_out(out_result, "out_result", result) }
}

/// Estimate consumption emissions.
///
/// # Returns
/// - `CarbonErrorCode::Ok` with `out_result` written
/// - `CarbonErrorCode::NullPointer` if `input` or `out_result` is null
///
/// # Safety
/// `input` must point to a valid `CarbonConsumptionInput` whose string field
/// is null or null-terminated; `out_result` must be valid for writes.
#[no_mangle]
pub unsafe extern "C" fn carbon_consumption_emissions(
    input: *const CarbonConsumptionInput,
    out_result: *mut CarbonConsumptionResult,
) -> CarbonErrorCode {
    let result = unsafe { ref_from_ptr(input, "input") }.map(|input| {
        let consumption = ConsumptionInput::new(
            unsafe { answer_from_ptr(input.shower_freq) },
            input.grocery_spend,
            input.clothes_per_month,
        );
        CarbonConsumptionResult::from(&consumption_emissions(&consumption))
    });

    unsafe { write_out(out_result, "out_result", result) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::carbon_get_last_error_code;
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::ptr;

    #[test]
    fn test_waste_extra_large_over_ffi() {
        let size = CString::new("Extra Large").unwrap();
        let input = CarbonWasteInput {
            waste_size: size.as_ptr(),
            bags_per_week: 3.0,
            recycle: true,
        };
        let mut out = MaybeUninit::<CarbonWasteResult>::uninit();

        let code = unsafe { carbon_waste_emissions(&input, out.as_mut_ptr()) };
        assert_eq!(code, CarbonErrorCode::Ok);

        let out = unsafe { out.assume_init() };
        assert_eq!(out.monthly_bags, 12.0);
        assert_eq!(out.total_kg_month, 144.0);
    }

    #[test]
    fn test_null_answers_use_defaults() {
        let input = CarbonEnergyInput {
            power_source: ptr::null(),
            cooking_system: ptr::null(),
            efficient_devices: ptr::null(),
            pc_hours_per_day: 0.0,
            internet_hours_per_day: 0.0,
        };
        let mut out = MaybeUninit::<CarbonEnergyResult>::uninit();

        let code = unsafe { carbon_energy_emissions(&input, out.as_mut_ptr()) };
        assert_eq!(code, CarbonErrorCode::Ok);
        let out = unsafe { out.assume_init() };
        assert_eq!(out.base_kg_month, 180.0);
        assert_eq!(out.cooking_kg_month, 25.0);
        assert_eq!(out.total_kg_month, 205.0);
    }

    #[test]
    fn test_personal_with_age() {
        let gender = CString::new("male").unwrap();
        let diet = CString::new("vegan").unwrap();
        let social = CString::new("never").unwrap();
        let input = CarbonPersonalInput {
            height_cm: 180.0,
            weight_kg: 80.0,
            gender: gender.as_ptr(),
            diet: diet.as_ptr(),
            social_activity: social.as_ptr(),
            has_age: true,
            age: 40.0,
        };
        let mut out = MaybeUninit::<CarbonPersonalResult>::uninit();

        let code = unsafe { carbon_personal_emissions(&input, out.as_mut_ptr()) };
        assert_eq!(code, CarbonErrorCode::Ok);
        assert_eq!(unsafe { out.assume_init() }.bmr, 1730.0);
    }

    #[test]
    fn test_null_input_is_reported() {
        let mut out = MaybeUninit::<CarbonTravelResult>::uninit();
        let code = unsafe { carbon_travel_emissions(ptr::null(), out.as_mut_ptr()) };
        assert_eq!(code, CarbonErrorCode::NullPointer);
        assert_eq!(carbon_get_last_error_code(), CarbonErrorCode::NullPointer);

        let shower = CString::new("daily").unwrap();
        let input = CarbonConsumptionInput {
            shower_freq: shower.as_ptr(),
            grocery_spend: 0.0,
            clothes_per_month: 0,
        };
        let code = unsafe { carbon_consumption_emissions(&input, ptr::null_mut()) };
        assert_eq!(code, CarbonErrorCode::NullPointer);
    }
}
