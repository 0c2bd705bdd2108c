use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::{FederatedIdentity, Role, User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};
use crate::shared::database::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: sea_orm::DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let (provider, provider_id) = match data.identity {
            Some(identity) => (
                Some(identity.provider.as_str().to_string()),
                Some(identity.provider_id),
            ),
            None => (None, None),
        };

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            wallet_balance: Set(0),
            role: Set(Role::User.as_str().to_string()),
            provider: Set(provider),
            provider_id: Set(provider_id),
            profile_pic: Set(data.profile_pic),
            reset_token: Set(None),
            reset_token_expires_at: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            db_error(e)
        })?;

        Ok(inserted.into_domain())
    }

    async fn link_identity(
        &self,
        user_id: UserId,
        identity: FederatedIdentity,
        profile_pic: Option<String>,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(db_error)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.provider = Set(Some(identity.provider.as_str().to_string()));
        active_user.provider_id = Set(Some(identity.provider_id));
        if profile_pic.is_some() {
            active_user.profile_pic = Set(profile_pic);
        }

        let updated = active_user.update(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::UserAlreadyExists;
            }
            db_error(e)
        })?;

        Ok(updated.into_domain())
    }

    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::ResetToken, Expr::value(Some(token_digest)))
            .col_expr(
                UserColumn::ResetTokenExpiresAt,
                Expr::value(Some(expires_at.fixed_offset())),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn revoke_reset_token(
        &self,
        user_id: UserId,
        token_digest: &str,
    ) -> Result<(), UserRepositoryError> {
        UserEntity::update_many()
            .col_expr(UserColumn::ResetToken, Expr::value(Option::<String>::None))
            .col_expr(
                UserColumn::ResetTokenExpiresAt,
                Expr::value(Option::<sea_orm::prelude::DateTimeWithTimeZone>::None),
            )
            .filter(UserColumn::Id.eq(user_id.value()))
            .filter(UserColumn::ResetToken.eq(token_digest))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn reset_password_with_token(
        &self,
        token_digest: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<bool, UserRepositoryError> {
        // Password swap and token burn happen in the same row update
        let result = UserEntity::update_many()
            .col_expr(UserColumn::PasswordHash, Expr::value(Some(new_password_hash)))
            .col_expr(UserColumn::ResetToken, Expr::value(Option::<String>::None))
            .col_expr(
                UserColumn::ResetTokenExpiresAt,
                Expr::value(Option::<sea_orm::prelude::DateTimeWithTimeZone>::None),
            )
            .filter(UserColumn::ResetToken.eq(token_digest))
            .filter(UserColumn::ResetTokenExpiresAt.gt(now.fixed_offset()))
            .exec(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected > 0)
    }
}
