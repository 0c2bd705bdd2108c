use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::catalog::adapter::outgoing::PackageRepositoryPostgres;
use crate::catalog::application::domain::bd_price_list;
use crate::catalog::application::ports::outgoing::PackageRepository;
use crate::shared::database::connect;

/// Fresh in-memory database with every migration applied.
pub async fn migrated_db() -> Arc<DatabaseConnection> {
    let db = connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite should open");
    Migrator::up(&db, None)
        .await
        .expect("migrations should apply to sqlite");
    Arc::new(db)
}

/// Loads the BD price list; package 1 is "25 Diamond" at 30 taka.
pub async fn seed_catalog(db: &Arc<DatabaseConnection>) {
    PackageRepositoryPostgres::new(db.clone())
        .insert_all(bd_price_list())
        .await
        .expect("price list should insert");
}

pub async fn create_user_with_balance(db: &DatabaseConnection, email: &str, balance: i64) -> UserId {
    let id = Uuid::new_v4();
    users::ActiveModel {
        id: Set(id),
        name: Set("Test User".to_string()),
        email: Set(email.to_string()),
        password_hash: Set(None),
        wallet_balance: Set(balance),
        role: Set("user".to_string()),
        provider: Set(None),
        provider_id: Set(None),
        profile_pic: Set(None),
        reset_token: Set(None),
        reset_token_expires_at: Set(None),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await
    .expect("user row should insert");

    UserId::from(id)
}

pub async fn balance_of(db: &DatabaseConnection, user_id: UserId) -> i64 {
    users::Entity::find_by_id(user_id.value())
        .one(db)
        .await
        .expect("user lookup should succeed")
        .expect("user should exist")
        .wallet_balance
}
