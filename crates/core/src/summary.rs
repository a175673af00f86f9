//! Text summary of an estimate
//!
//! Derives the headline, per-category shares and the tree-offset sentence
//! shown next to the breakdown. Rendering is left to the caller.

use serde::Serialize;
use std::fmt;

use crate::breakdown::Breakdown;
use crate::core_types::{round_whole, Category, KgCo2PerMonth};
use crate::profile::FootprintReport;

/// Title shown above the headline
pub const SUMMARY_TITLE: &str = "Your Carbon Footprint";

/// Monthly kg CO₂ offset credited to one tree
pub const KG_CO2_PER_TREE_MONTH: f64 = 411.4;

/// Number of trees needed to offset a monthly prediction (ties to even)
pub fn trees_owed(prediction: i64) -> i64 {
    round_whole(prediction as f64 / KG_CO2_PER_TREE_MONTH)
}

/// One category's slice of the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: KgCo2PerMonth,
    /// Percentage of the breakdown sum (0 when the sum is 0)
    pub percent: f64,
}

/// Text-ready summary of a breakdown and its prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintSummary {
    pub prediction: i64,
    pub shares: Vec<CategoryShare>,
    pub trees_owed: i64,
}

impl FootprintSummary {
    pub fn from_breakdown(breakdown: &Breakdown) -> Self {
        let prediction = breakdown.prediction();
        let sum = *breakdown.sum();
        let shares = breakdown
            .entries()
            .map(|(category, total)| CategoryShare {
                category,
                total,
                percent: if sum == 0.0 { 0.0 } else { *total / sum * 100.0 },
            })
            .collect();

        Self {
            prediction,
            shares,
            trees_owed: trees_owed(prediction),
        }
    }

    pub fn from_report(report: &FootprintReport) -> Self {
        Self::from_breakdown(&report.breakdown)
    }

    /// e.g. `"695 kg CO₂ / month"`
    pub fn headline(&self) -> String {
        format!("{} kg CO₂ / month", self.prediction)
    }

    /// e.g. `"You owe nature 2 trees monthly."`
    pub fn trees_sentence(&self) -> String {
        let plural = if self.trees_owed == 1 { "" } else { "s" };
        format!("You owe nature {} tree{} monthly.", self.trees_owed, plural)
    }
}

impl fmt::Display for FootprintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_TITLE}")?;
        writeln!(f, "{}", self.headline())?;
        for share in &self.shares {
            writeln!(
                f,
                "  {:<12} {:>10.2} kg  {:>5.1}%",
                share.category.name(),
                *share.total,
                share.percent
            )?;
        }
        write!(f, "{}", self.trees_sentence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(values: [f64; 5]) -> Breakdown {
        Breakdown::from_totals(values.map(KgCo2PerMonth::new))
    }

    #[test]
    fn test_trees_owed() {
        assert_eq!(trees_owed(0), 0);
        assert_eq!(trees_owed(200), 0);
        assert_eq!(trees_owed(695), 2);
        assert_eq!(trees_owed(412), 1);
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let summary = FootprintSummary::from_breakdown(&breakdown([10.0, 20.0, 30.0, 40.0, 50.0]));
        let total: f64 = summary.shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((summary.shares[4].percent - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.prediction, 150);
        assert_eq!(summary.headline(), "150 kg CO₂ / month");
    }

    #[test]
    fn test_zero_breakdown_has_zero_shares() {
        let summary = FootprintSummary::from_breakdown(&breakdown([0.0; 5]));
        assert!(summary.shares.iter().all(|s| s.percent == 0.0));
        assert_eq!(summary.trees_sentence(), "You owe nature 0 trees monthly.");
    }

    #[test]
    fn test_singular_tree() {
        let summary = FootprintSummary::from_breakdown(&breakdown([400.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(summary.trees_owed, 1);
        assert_eq!(summary.trees_sentence(), "You owe nature 1 tree monthly.");

        let text = summary.to_string();
        assert!(text.starts_with("Your Carbon Footprint\n400 kg CO₂ / month"));
        assert!(text.contains("Personal"));
    }
}
