use async_trait::async_trait;
use std::sync::Arc;

use crate::catalog::application::domain::Package;
use crate::catalog::application::ports::outgoing::{PackageQuery, PackageQueryError};

/// Read-only snapshot of the catalog taken once at startup. The catalog has
/// no write path at runtime, so the snapshot never goes stale.
#[derive(Clone, Debug, Default)]
pub struct CatalogCache {
    packages: Arc<Vec<Package>>,
}

impl CatalogCache {
    pub async fn load<Q>(source: &Q) -> Result<Self, PackageQueryError>
    where
        Q: PackageQuery + ?Sized,
    {
        let packages = source.list_all().await?;
        Ok(Self::from_packages(packages))
    }

    pub fn from_packages(packages: Vec<Package>) -> Self {
        Self {
            packages: Arc::new(packages),
        }
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

#[async_trait]
impl PackageQuery for CatalogCache {
    async fn list_all(&self) -> Result<Vec<Package>, PackageQueryError> {
        Ok(self.packages.as_ref().clone())
    }

    async fn find_by_id(&self, package_id: i32) -> Result<Option<Package>, PackageQueryError> {
        Ok(self.packages.iter().find(|p| p.id == package_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::adapter::outgoing::{PackageQueryPostgres, PackageRepositoryPostgres};
    use crate::catalog::application::domain::bd_price_list;
    use crate::catalog::application::ports::outgoing::PackageRepository;
    use crate::tests::support::sqlite::migrated_db;

    #[tokio::test]
    async fn snapshot_matches_store() {
        let db = migrated_db().await;
        PackageRepositoryPostgres::new(db.clone())
            .insert_all(bd_price_list())
            .await
            .unwrap();

        let cache = CatalogCache::load(&PackageQueryPostgres::new(db)).await.unwrap();

        assert_eq!(cache.len(), 46);
        let first = cache.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(first.name, "25 Diamond");
        assert!(cache.find_by_id(999).await.unwrap().is_none());
    }
}
