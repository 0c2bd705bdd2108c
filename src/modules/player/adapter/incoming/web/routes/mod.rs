mod check_player;

pub use check_player::*;
