use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::packages::{ActiveModel, Entity};
use crate::catalog::application::domain::NewPackage;
use crate::catalog::application::ports::outgoing::{PackageRepository, PackageRepositoryError};

#[derive(Clone, Debug)]
pub struct PackageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PackageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> PackageRepositoryError {
        PackageRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PackageRepository for PackageRepositoryPostgres {
    async fn count(&self) -> Result<u64, PackageRepositoryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    async fn insert_all(&self, packages: Vec<NewPackage>) -> Result<u64, PackageRepositoryError> {
        if packages.is_empty() {
            return Ok(0);
        }

        let total = packages.len() as u64;
        let rows = packages.into_iter().map(|p| ActiveModel {
            id: NotSet,
            category: Set(p.category),
            name: Set(p.name),
            price: Set(p.price),
            diamonds: Set(p.diamonds),
        });

        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Entity::insert_many(rows).exec(&txn).await {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(total)
    }
}
