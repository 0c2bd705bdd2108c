use async_trait::async_trait;

use crate::catalog::application::domain::Package;
use crate::catalog::application::ports::incoming::use_cases::{
    ListPackagesError, ListPackagesUseCase,
};
use crate::catalog::application::ports::outgoing::PackageQuery;

pub struct ListPackagesService<Q>
where
    Q: PackageQuery,
{
    query: Q,
}

impl<Q> ListPackagesService<Q>
where
    Q: PackageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPackagesUseCase for ListPackagesService<Q>
where
    Q: PackageQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Package>, ListPackagesError> {
        self.query
            .list_all()
            .await
            .map_err(|e| ListPackagesError::QueryError(e.to_string()))
    }
}
