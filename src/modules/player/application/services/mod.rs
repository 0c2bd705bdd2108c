pub mod check_player_name_service;

pub use check_player_name_service::CheckPlayerNameService;
