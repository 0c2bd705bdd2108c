use async_trait::async_trait;

use crate::player::application::domain::PlayerUid;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerDirectoryError {
    #[error("Player directory unavailable: {0}")]
    Unavailable(String),
}

/// The game's player registry.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    /// Display name for the uid, or `None` when the game knows no such player.
    async fn lookup_name(&self, uid: &PlayerUid) -> Result<Option<String>, PlayerDirectoryError>;
}
