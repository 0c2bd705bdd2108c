use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::player::application::domain::PlayerUid;
use crate::player::application::ports::outgoing::{PlayerDirectory, PlayerDirectoryError};

/// Stand-in for the game's lookup service: every well-formed uid resolves
/// to `Player_<last four>` after a fixed delay.
#[derive(Clone, Debug)]
pub struct SyntheticPlayerDirectory {
    delay: Duration,
}

impl SyntheticPlayerDirectory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl PlayerDirectory for SyntheticPlayerDirectory {
    async fn lookup_name(&self, uid: &PlayerUid) -> Result<Option<String>, PlayerDirectoryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        debug!(player_uid = %uid, "Synthetic player lookup");
        Ok(Some(format!("Player_{}", uid.suffix())))
    }
}
