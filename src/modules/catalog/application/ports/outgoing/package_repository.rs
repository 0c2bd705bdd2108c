use async_trait::async_trait;

use crate::catalog::application::domain::NewPackage;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn count(&self) -> Result<u64, PackageRepositoryError>;

    /// Inserts all packages or none of them.
    async fn insert_all(&self, packages: Vec<NewPackage>) -> Result<u64, PackageRepositoryError>;
}
