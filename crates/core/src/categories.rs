//! Game category constants and the category selector used by the listing.
//!
//! Categories are free-form strings in storage; the list below is only the
//! set offered by the admin form. Nothing here rejects other values.

use std::collections::BTreeSet;

use crate::game::Game;

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

pub const CATEGORY_ACTION: &str = "Action";
pub const CATEGORY_RPG: &str = "RPG";
pub const CATEGORY_STRATEGY: &str = "Strategy";
pub const CATEGORY_PUZZLE: &str = "Puzzle";
pub const CATEGORY_RACING: &str = "Racing";
pub const CATEGORY_SHOOTER: &str = "Shooter";
pub const CATEGORY_ADVENTURE: &str = "Adventure";
pub const CATEGORY_SPORTS: &str = "Sports";

/// Categories offered by the admin form, in display order.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    CATEGORY_ACTION,
    CATEGORY_RPG,
    CATEGORY_STRATEGY,
    CATEGORY_PUZZLE,
    CATEGORY_RACING,
    CATEGORY_SHOOTER,
    CATEGORY_ADVENTURE,
    CATEGORY_SPORTS,
];

/// Category preselected on a fresh create form.
pub const DEFAULT_CATEGORY: &str = CATEGORY_ACTION;

/// Selector value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Number of distinct category values across `games`.
pub fn distinct_count(games: &[Game]) -> usize {
    games
        .iter()
        .map(|g| g.category.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// A parsed category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "all categories" sentinel: every entry matches.
    All,
    /// Exact, case-sensitive match on the entry's category.
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector value. Absent, empty and [`ALL_CATEGORIES`] all mean
    /// "no filter".
    pub fn parse(selector: Option<&str>) -> Self {
        match selector {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(category) => Self::Only(category.to_string()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_parse_to_all() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("all")), CategoryFilter::All);
    }

    #[test]
    fn named_category_matches_exactly() {
        let filter = CategoryFilter::parse(Some("Racing"));
        assert!(filter.matches("Racing"));
        assert!(!filter.matches("racing"));
        assert!(!filter.matches("RPG"));
    }

    #[test]
    fn all_matches_anything() {
        assert!(CategoryFilter::All.matches("Racing"));
        assert!(CategoryFilter::All.matches("Homebrew"));
    }

    #[test]
    fn default_is_among_suggestions() {
        assert!(SUGGESTED_CATEGORIES.contains(&DEFAULT_CATEGORY));
        assert!(!SUGGESTED_CATEGORIES.contains(&ALL_CATEGORIES));
        assert_eq!(SUGGESTED_CATEGORIES.len(), 8);
    }
}
