//! Client-side filtering of the catalog listing.
//!
//! A flat conjunction of two predicates: case-insensitive substring match of
//! the search term on title or description, and the category selector. No
//! ranking, no pagination; input order is preserved.

use serde::Deserialize;

use crate::categories::CategoryFilter;
use crate::game::Game;

/// Listing query parameters (`?search=&category=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl GameQuery {
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(self.category.as_deref())
    }

    pub fn search_term(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }

    /// Apply this query to `games`.
    pub fn apply(&self, games: &[Game]) -> Vec<Game> {
        filter_games(games, self.search_term(), &self.category_filter())
    }
}

/// Whether `game` matches the search term. The term is not trimmed; an empty
/// term matches every game.
pub fn matches_search(game: &Game, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let needle = search_term.to_lowercase();
    game.title.to_lowercase().contains(&needle)
        || game.description.to_lowercase().contains(&needle)
}

/// Return the games matching both the search term and the category selector,
/// in input order.
pub fn filter_games(games: &[Game], search_term: &str, category: &CategoryFilter) -> Vec<Game> {
    games
        .iter()
        .filter(|g| category.matches(&g.category) && matches_search(g, search_term))
        .cloned()
        .collect()
}
