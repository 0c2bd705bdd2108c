use async_trait::async_trait;

use crate::catalog::application::domain::Package;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPackagesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListPackagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Package>, ListPackagesError>;
}
