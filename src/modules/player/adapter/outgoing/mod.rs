pub mod synthetic_player_directory;

pub use synthetic_player_directory::SyntheticPlayerDirectory;
