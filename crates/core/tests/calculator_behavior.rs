//! Behaviour of the category calculators and the aggregator on survey answers
use approx::{assert_abs_diff_eq, assert_relative_eq};
use carbon_footprint_core::{
    compute_breakdown, consumption_emissions, energy_emissions, personal_emissions,
    travel_emissions, waste_emissions, Category, CategoryResult, ConsumptionInput, EnergyInput,
    PersonalInput, TravelInput, WasteInput,
};
use ctor::ctor;

#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_waste_extra_large_with_recycling() {
    let waste = waste_emissions(&WasteInput::new("Extra Large", 3.0, true));

    assert_eq!(waste.monthly_bags, 12.0);
    assert_eq!(waste.per_bag_kg_co2, 15.0);
    assert_eq!(waste.recycle_multiplier, 0.8);
    assert_eq!(*waste.total(), 144.0);
}

#[test]
fn test_energy_coal_grill_no_efficiency() {
    let energy = energy_emissions(&EnergyInput::new("coal", "grill", "no", 0.0, 0.0));

    assert_eq!(*energy.base_kg_month, 300.0);
    assert_eq!(*energy.cooking_kg_month, 40.0);
    assert_eq!(energy.efficiency_multiplier, 1.1);
    assert_eq!(*energy.pc_kg_month, 0.0);
    assert_eq!(*energy.internet_kg_month, 0.0);
    assert_eq!(*energy.total(), 374.0);
}

#[test]
fn test_consumption_twice_a_day() {
    let consumption = consumption_emissions(&ConsumptionInput::new("twice a day", 200.0, 5));

    assert_eq!(*consumption.shower_kg_month, 120.0);
    assert_eq!(*consumption.groceries_kg_month, 20.0);
    assert_eq!(*consumption.clothes_kg_month, 50.0);
    assert_eq!(*consumption.total(), 190.0);
}

#[test]
fn test_travel_garbled_mode_behaves_like_none() {
    let starship = travel_emissions(&TravelInput::new("starship", 0.0, 0));
    let none = travel_emissions(&TravelInput::new("none", 0.0, 0));

    assert_eq!(starship.road_kg_month, none.road_kg_month);
    assert_eq!(starship.flights_kg_month, none.flights_kg_month);
    assert_eq!(*starship.total(), 0.0);
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    let canonical = energy_emissions(&EnergyInput::new("natural gas", "airfryer", "yes", 2.0, 3.0));
    let shouty = energy_emissions(&EnergyInput::new("  NATURAL GAS ", "AirFryer", " Yes", 2.0, 3.0));
    assert_eq!(canonical.total(), shouty.total());

    let travel = travel_emissions(&TravelInput::new(" Train ", 1000.0, 0));
    assert_abs_diff_eq!(*travel.total(), 50.0, epsilon = 1e-9);
}

#[test]
fn test_personal_male_high_meat_sometimes() {
    let personal = personal_emissions(
        &PersonalInput::new(180.0, 80.0, "MALE", "high-meat", "sometimes").with_age(40.0),
    );

    // 800 + 1125 - 200 + 5
    assert_eq!(personal.bmr, 1730.0);
    assert_eq!(*personal.diet_kg_month, 291.67);
    assert_eq!(personal.social_multiplier, 1.1);
    // 3500/12 * 1.1 + 1730 * 0.001 * 365 / 12
    let expected = 3500.0 / 12.0 * 1.1 + 1730.0 * 0.001 * 365.0 / 12.0;
    assert_relative_eq!(*personal.total(), expected, max_relative = 1e-4);
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let input = PersonalInput::new(172.5, 68.2, "female", "vegetarian", "frequent");
    let first = personal_emissions(&input);
    let second = personal_emissions(&input);
    assert_eq!(first.total().to_bits(), second.total().to_bits());
    assert_eq!(first, second);

    let travel = TravelInput::new("Motorcycle", 1234.5, 2);
    let (a, b) = (travel_emissions(&travel), travel_emissions(&travel));
    assert_eq!(a.total().to_bits(), b.total().to_bits());
    assert_eq!(a, b);

    let waste = WasteInput::new("large", 2.5, true);
    let (a, b) = (waste_emissions(&waste), waste_emissions(&waste));
    assert_eq!(a.total().to_bits(), b.total().to_bits());
    assert_eq!(a, b);

    let energy = EnergyInput::new("natural gas", "oven", "yes", 3.3, 7.1);
    let (a, b) = (energy_emissions(&energy), energy_emissions(&energy));
    assert_eq!(a.total().to_bits(), b.total().to_bits());
    assert_eq!(a, b);

    let consumption = ConsumptionInput::new("more frequently", 187.35, 4);
    let (a, b) = (consumption_emissions(&consumption), consumption_emissions(&consumption));
    assert_eq!(a.total().to_bits(), b.total().to_bits());
    assert_eq!(a, b);
}

#[test]
fn test_half_cent_terms_round_to_even() {
    // 1.25 * 0.1 = 0.125 and 90.125 sit exactly on half cents
    let consumption = consumption_emissions(&ConsumptionInput::new("daily", 1.25, 0));
    assert_eq!(*consumption.groceries_kg_month, 0.12);
    assert_eq!(*consumption.total(), 90.12);

    // 62.5 * 0.05 = 3.125
    let travel = travel_emissions(&TravelInput::new("train", 62.5, 0));
    assert_eq!(*travel.road_kg_month, 3.12);
    assert_eq!(*travel.total(), 3.12);
}

#[test]
fn test_breakdown_from_calculator_results() {
    let personal = personal_emissions(&PersonalInput::default());
    let travel = travel_emissions(&TravelInput::new("bus", 250.0, 0));
    let waste = waste_emissions(&WasteInput::new("small", 1.0, false));
    let energy = energy_emissions(&EnergyInput::new("wood", "microwave", "yes", 0.0, 0.0));
    let consumption = consumption_emissions(&ConsumptionInput::new("less frequently", 0.0, 0));

    let breakdown = compute_breakdown(&personal, &travel, &waste, &energy, &consumption);

    assert_eq!(breakdown[Category::Personal], personal.total());
    assert_eq!(breakdown[Category::Travel], 20.0);
    assert_eq!(breakdown[Category::Waste], 20.0);
    // (90 + 15) * 0.9 = 94.5
    assert_eq!(breakdown[Category::Energy], 94.5);
    assert_eq!(breakdown[Category::Consumption], 30.0);

    let expected = *personal.total() + 20.0 + 20.0 + 94.5 + 30.0;
    assert_eq!(breakdown.prediction(), expected.round_ties_even() as i64);
}

#[test]
fn test_negative_numbers_pass_through() {
    let travel = travel_emissions(&TravelInput::new("car", -100.0, 0));
    assert_eq!(*travel.total(), -20.0);

    let consumption = consumption_emissions(&ConsumptionInput::new("daily", -1000.0, 0));
    assert_eq!(*consumption.total(), -10.0);
}
