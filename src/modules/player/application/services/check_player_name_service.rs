use async_trait::async_trait;

use crate::player::application::domain::PlayerUid;
use crate::player::application::ports::incoming::use_cases::{
    CheckPlayerNameError, CheckPlayerNameUseCase,
};
use crate::player::application::ports::outgoing::PlayerDirectory;

pub struct CheckPlayerNameService<D>
where
    D: PlayerDirectory,
{
    directory: D,
}

impl<D> CheckPlayerNameService<D>
where
    D: PlayerDirectory,
{
    pub fn new(directory: D) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> CheckPlayerNameUseCase for CheckPlayerNameService<D>
where
    D: PlayerDirectory + Send + Sync,
{
    async fn execute(&self, uid: &str) -> Result<String, CheckPlayerNameError> {
        let uid = PlayerUid::parse(uid)?;

        self.directory
            .lookup_name(&uid)
            .await
            .map_err(|e| CheckPlayerNameError::DirectoryError(e.to_string()))?
            .ok_or(CheckPlayerNameError::PlayerNotFound)
    }
}
