pub mod check_player_name;

pub use check_player_name::{CheckPlayerNameError, CheckPlayerNameUseCase};
