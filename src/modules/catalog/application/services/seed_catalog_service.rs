use async_trait::async_trait;
use tracing::info;

use crate::catalog::application::domain::bd_price_list;
use crate::catalog::application::ports::incoming::use_cases::{
    SeedCatalogError, SeedCatalogUseCase, SeedOutcome,
};
use crate::catalog::application::ports::outgoing::PackageRepository;

/// Loads the built-in price list into an empty catalog. A catalog that
/// already holds packages is left alone; existing rows are never rewritten.
pub struct SeedCatalogService<R>
where
    R: PackageRepository,
{
    repository: R,
}

impl<R> SeedCatalogService<R>
where
    R: PackageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SeedCatalogUseCase for SeedCatalogService<R>
where
    R: PackageRepository + Send + Sync,
{
    async fn execute(&self) -> Result<SeedOutcome, SeedCatalogError> {
        let existing = self
            .repository
            .count()
            .await
            .map_err(|e| SeedCatalogError::RepositoryError(e.to_string()))?;

        if existing > 0 {
            info!(packages = existing, "Catalog already seeded");
            return Ok(SeedOutcome::AlreadyPresent(existing));
        }

        let inserted = self
            .repository
            .insert_all(bd_price_list())
            .await
            .map_err(|e| SeedCatalogError::RepositoryError(e.to_string()))?;

        info!(packages = inserted, "Catalog seeded from built-in price list");
        Ok(SeedOutcome::Seeded(inserted))
    }
}
