use async_trait::async_trait;

use crate::catalog::application::domain::Package;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PackageQuery: Send + Sync {
    /// Every package in insertion order.
    async fn list_all(&self) -> Result<Vec<Package>, PackageQueryError>;
    async fn find_by_id(&self, package_id: i32) -> Result<Option<Package>, PackageQueryError>;
}
