mod game_repo;

pub use game_repo::GameRepo;
