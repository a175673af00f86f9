//! Life-domain categories that emissions are estimated over

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five estimated life domains.
///
/// The declaration order is the breakdown order used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Travel,
    Waste,
    Energy,
    Consumption,
}

impl Category {
    /// All categories in breakdown order
    pub const ALL: [Category; 5] = [
        Category::Personal,
        Category::Travel,
        Category::Waste,
        Category::Energy,
        Category::Consumption,
    ];

    /// Display label
    pub fn name(self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Travel => "Travel",
            Category::Waste => "Waste",
            Category::Energy => "Energy",
            Category::Consumption => "Consumption",
        }
    }

    /// Position in the breakdown
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_matches_index() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(Category::Consumption.to_string(), "Consumption");
    }
}
