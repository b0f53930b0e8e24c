//! The single shared category table. Every surface that needs category
//! labels, bucket labels, or colors reads it from here.

use serde::{Deserialize, Serialize};

/// Competitor tiers plus the team-event type `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    SubJunior,
    Junior,
    Senior,
    SuperSenior,
    General,
}

impl Category {
    /// The four competitor tiers, in fixed display order. `General` is not
    /// a tier; it marks team events.
    pub const TIERS: [Category; 4] = [
        Category::SubJunior,
        Category::Junior,
        Category::Senior,
        Category::SuperSenior,
    ];

    /// The label as stored on program records and shown on filter chips.
    pub fn label(&self) -> &'static str {
        match self {
            Category::SubJunior => "Sub Junior",
            Category::Junior => "Junior",
            Category::Senior => "Senior",
            Category::SuperSenior => "Super Senior",
            Category::General => "General",
        }
    }

    /// The uppercased grouping label used by the category leaderboard.
    pub fn bucket_label(&self) -> &'static str {
        match self {
            Category::SubJunior => "SUB JUNIOR",
            Category::Junior => "JUNIOR",
            Category::Senior => "SENIOR",
            Category::SuperSenior => "SUPER SENIOR",
            Category::General => "GENERAL",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::SubJunior => "#ef4444",
            Category::Junior => "#10b981",
            Category::Senior => "#3b82f6",
            Category::SuperSenior => "#8b5cf6",
            Category::General => "#f59e0b",
        }
    }

    /// Exact label match, as used by the catalog filter.
    pub fn parse(label: &str) -> Option<Category> {
        match label {
            "Sub Junior" => Some(Category::SubJunior),
            "Junior" => Some(Category::Junior),
            "Senior" => Some(Category::Senior),
            "Super Senior" => Some(Category::SuperSenior),
            "General" => Some(Category::General),
            _ => None,
        }
    }

    /// Case-insensitive tier match, as used by the leaderboard buckets.
    /// `General` never buckets.
    pub fn from_bucket(value: &str) -> Option<Category> {
        let upper = value.trim().to_uppercase();
        Category::TIERS
            .into_iter()
            .find(|tier| tier.bucket_label() == upper)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One catalog filter chip. `category: None` is the `All` chip.
#[derive(Debug, Clone, Copy)]
pub struct CatalogChip {
    pub label: &'static str,
    pub color: &'static str,
    pub gradient: [&'static str; 2],
    pub category: Option<Category>,
}

/// The fixed chip row of the program catalog, in display order.
pub const CATALOG_CHIPS: [CatalogChip; 6] = [
    CatalogChip {
        label: "All",
        color: "#6366f1",
        gradient: ["#6366f1", "#8b5cf6"],
        category: None,
    },
    CatalogChip {
        label: "Sub Junior",
        color: "#ef4444",
        gradient: ["#ef4444", "#f97316"],
        category: Some(Category::SubJunior),
    },
    CatalogChip {
        label: "Junior",
        color: "#10b981",
        gradient: ["#10b981", "#14b8a6"],
        category: Some(Category::Junior),
    },
    CatalogChip {
        label: "Senior",
        color: "#3b82f6",
        gradient: ["#3b82f6", "#6366f1"],
        category: Some(Category::Senior),
    },
    CatalogChip {
        label: "Super Senior",
        color: "#8b5cf6",
        gradient: ["#8b5cf6", "#a855f7"],
        category: Some(Category::SuperSenior),
    },
    CatalogChip {
        label: "General",
        color: "#f59e0b",
        gradient: ["#f59e0b", "#d97706"],
        category: Some(Category::General),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_match_is_case_insensitive() {
        assert_eq!(Category::from_bucket("sub junior"), Some(Category::SubJunior));
        assert_eq!(Category::from_bucket("SENIOR"), Some(Category::Senior));
        assert_eq!(Category::from_bucket(" Junior "), Some(Category::Junior));
        assert_eq!(Category::from_bucket("General"), None);
        assert_eq!(Category::from_bucket("Open"), None);
    }

    #[test]
    fn label_match_is_exact() {
        assert_eq!(Category::parse("Senior"), Some(Category::Senior));
        assert_eq!(Category::parse("senior"), None);
        assert_eq!(Category::parse("SENIOR"), None);
    }

    #[test]
    fn chip_table_covers_all_categories_once() {
        assert_eq!(CATALOG_CHIPS[0].category, None);
        let listed: Vec<_> = CATALOG_CHIPS.iter().filter_map(|c| c.category).collect();
        assert_eq!(
            listed,
            vec![
                Category::SubJunior,
                Category::Junior,
                Category::Senior,
                Category::SuperSenior,
                Category::General
            ]
        );
    }
}
