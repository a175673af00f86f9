//! Personal emissions: diet, metabolism and social activity
//!
//! Diet factors are annual per-capita footprints in tonnes; metabolism is
//! estimated from the Mifflin-St Jeor basal metabolic rate with a flat
//! kcal -> kg CO₂ conversion.
//!
//! # References
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure in healthy individuals. Am J Clin Nutr 51(2).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CategoryResult;
use crate::core_types::{round2, Category, KgCo2PerMonth, LookupTable};

/// Age assumed when the survey does not ask for one
pub const DEFAULT_AGE: f64 = 25.0;

/// kg CO₂ per kcal of basal metabolism
pub const KCAL_TO_CO2_KG: f64 = 0.001;

/// Annual diet footprint in tonnes CO₂ per year
pub static DIET_TONNES_PER_YEAR: LookupTable<f64> = LookupTable::new(
    "diet",
    &[
        ("vegan", 1.5),
        ("vegetarian", 1.7),
        ("omnivore", 2.5),
        ("high-meat", 3.5),
    ],
    "omnivore",
);

/// Multiplier applied to the diet footprint for eating/going out
pub static SOCIAL_MULTIPLIER: LookupTable<f64> = LookupTable::new(
    "social_activity",
    &[("never", 1.0), ("sometimes", 1.1), ("frequent", 1.2)],
    "never",
);

/// Mifflin-St Jeor sex constant in kcal/day
pub static GENDER_OFFSET_KCAL: LookupTable<f64> = LookupTable::new(
    "gender",
    &[("female", -161.0), ("f", -161.0), ("male", 5.0), ("m", 5.0)],
    "female",
);

/// Survey answers for the personal category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInput {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: String,
    pub diet: String,
    pub social_activity: String,
    /// Age in years, [`DEFAULT_AGE`] when not given
    pub age: Option<f64>,
}

impl Default for PersonalInput {
    fn default() -> Self {
        Self {
            height_cm: 160.0,
            weight_kg: 75.0,
            gender: "female".to_string(),
            diet: "omnivore".to_string(),
            social_activity: "never".to_string(),
            age: None,
        }
    }
}

impl PersonalInput {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        gender: impl Into<String>,
        diet: impl Into<String>,
        social_activity: impl Into<String>,
    ) -> Self {
        Self {
            height_cm,
            weight_kg,
            gender: gender.into(),
            diet: diet.into(),
            social_activity: social_activity.into(),
            age: None,
        }
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }
}

/// Personal estimate with every intermediate term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalResult {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: String,
    pub diet: String,
    pub social_activity: String,
    pub age: f64,
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    pub diet_kg_month: KgCo2PerMonth,
    pub metabolic_kg_month: KgCo2PerMonth,
    pub social_multiplier: f64,
    pub total_personal_kg_month: KgCo2PerMonth,
}

impl CategoryResult for PersonalResult {
    const CATEGORY: Category = Category::Personal;

    fn total(&self) -> KgCo2PerMonth {
        self.total_personal_kg_month
    }
}

/// Basal metabolic rate in kcal/day (Mifflin-St Jeor)
///
/// BMR = 10·weight + 6.25·height − 5·age + s, with s = +5 for male and −161
/// otherwise.
pub fn calc_bmr(height_cm: f64, weight_kg: f64, age: f64, gender: &str) -> f64 {
    let s = GENDER_OFFSET_KCAL.resolve(gender);
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + s
}

/// Estimate personal monthly emissions.
///
/// Numeric inputs are not range-checked.
pub fn personal_emissions(input: &PersonalInput) -> PersonalResult {
    let age = input.age.unwrap_or(DEFAULT_AGE);

    let diet_tpy = DIET_TONNES_PER_YEAR.resolve(&input.diet);
    let diet_kg_month = (diet_tpy * 1000.0) / 12.0; // tonnes/yr -> kg/month

    let bmr = calc_bmr(input.height_cm, input.weight_kg, age, &input.gender);
    let metabolic_kg_month = (bmr * KCAL_TO_CO2_KG * 365.0) / 12.0; // kcal/day -> per month

    let social_multiplier = SOCIAL_MULTIPLIER.resolve(&input.social_activity);

    let total = diet_kg_month * social_multiplier + metabolic_kg_month;

    debug!(bmr, diet_kg_month, metabolic_kg_month, total, "Personal emissions");

    PersonalResult {
        height_cm: input.height_cm,
        weight_kg: input.weight_kg,
        gender: input.gender.clone(),
        diet: input.diet.clone(),
        social_activity: input.social_activity.clone(),
        age,
        bmr: round2(bmr),
        diet_kg_month: KgCo2PerMonth::new(round2(diet_kg_month)),
        metabolic_kg_month: KgCo2PerMonth::new(round2(metabolic_kg_month)),
        social_multiplier,
        total_personal_kg_month: KgCo2PerMonth::new(round2(total)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::lookup::assert_default_present;

    #[test]
    fn test_tables_have_defaults() {
        assert_default_present(&DIET_TONNES_PER_YEAR);
        assert_default_present(&SOCIAL_MULTIPLIER);
        assert_default_present(&GENDER_OFFSET_KCAL);
    }

    #[test]
    fn test_bmr_mifflin_st_jeor() {
        // 10*75 + 6.25*160 - 5*25 = 1625
        assert_eq!(calc_bmr(160.0, 75.0, 25.0, "female"), 1625.0 - 161.0);
        assert_eq!(calc_bmr(160.0, 75.0, 25.0, "Male"), 1630.0);
        assert_eq!(calc_bmr(160.0, 75.0, 25.0, "m"), 1630.0);
        assert_eq!(calc_bmr(160.0, 75.0, 25.0, "other"), 1464.0);
    }

    #[test]
    fn test_default_profile() {
        let result = personal_emissions(&PersonalInput::default());

        assert_eq!(result.bmr, 1464.0);
        assert_eq!(result.diet_kg_month, 208.33);
        // 1464 * 0.001 * 365 / 12 = 44.53
        assert_eq!(result.metabolic_kg_month, 44.53);
        assert_eq!(result.social_multiplier, 1.0);
        assert_eq!(result.total_personal_kg_month, 252.86);
        assert_eq!(result.age, DEFAULT_AGE);
    }

    #[test]
    fn test_social_multiplier_scales_diet_only() {
        let base = PersonalInput::new(180.0, 80.0, "male", "vegan", "never");
        let frequent = PersonalInput {
            social_activity: "Frequent".to_string(),
            ..base.clone()
        };

        let base = personal_emissions(&base);
        let frequent = personal_emissions(&frequent);

        assert_eq!(frequent.social_multiplier, 1.2);
        // vegan: 1500 / 12 = 125 kg/month, social adds 20%
        assert!((*frequent.total() - *base.total() - 25.0).abs() < 0.011);
    }

    #[test]
    fn test_unknown_categoricals_use_defaults() {
        let odd = PersonalInput::new(170.0, 70.0, "female", "pescatarian", "often");
        let plain = PersonalInput::new(170.0, 70.0, "female", "omnivore", "never");
        let odd = personal_emissions(&odd);
        let plain = personal_emissions(&plain);

        assert_eq!(odd.total(), plain.total());
        assert_eq!(odd.diet, "pescatarian");
    }

    #[test]
    fn test_age_lowers_metabolic_term() {
        let young = personal_emissions(&PersonalInput::default().with_age(20.0));
        let old = personal_emissions(&PersonalInput::default().with_age(60.0));
        assert!(old.total() < young.total());
    }
}
