//! Summary figures shown on the admin dashboard.

use serde::Serialize;

use crate::categories;
use crate::game::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_games: usize,
    pub category_count: usize,
}

impl CatalogStats {
    pub fn from_games(games: &[Game]) -> Self {
        Self {
            total_games: games.len(),
            category_count: categories::distinct_count(games),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn game(category: &str) -> Game {
        Game {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: "D".to_string(),
            image_url: "https://example.com/i.png".to_string(),
            download_url: "https://example.com/d.zip".to_string(),
            category: category.to_string(),
            file_size: "1 GB".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_catalog() {
        let stats = CatalogStats::from_games(&[]);
        assert_eq!(stats.total_games, 0);
        assert_eq!(stats.category_count, 0);
    }

    #[test]
    fn counts_distinct_categories() {
        let games = vec![game("RPG"), game("Racing"), game("RPG")];
        let stats = CatalogStats::from_games(&games);
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.category_count, 2);
    }
}
