use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedCatalogError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(u64),
    AlreadyPresent(u64),
}

#[async_trait]
pub trait SeedCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<SeedOutcome, SeedCatalogError>;
}
