pub mod player_uid;

pub use player_uid::{InvalidPlayerUid, PlayerUid};
