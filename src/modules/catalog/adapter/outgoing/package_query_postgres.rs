use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::packages::{Column, Entity};
use crate::catalog::application::domain::Package;
use crate::catalog::application::ports::outgoing::{PackageQuery, PackageQueryError};

#[derive(Clone, Debug)]
pub struct PackageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PackageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PackageQuery for PackageQueryPostgres {
    async fn list_all(&self) -> Result<Vec<Package>, PackageQueryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(|e| PackageQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Package::from).collect())
    }

    async fn find_by_id(&self, package_id: i32) -> Result<Option<Package>, PackageQueryError> {
        let row = Entity::find_by_id(package_id)
            .one(&*self.db)
            .await
            .map_err(|e| PackageQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Package::from))
    }
}
