use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: Option<String>,
    pub wallet_balance: i64,
    pub role: String,
    pub provider: Option<String>,
    pub provider_id: Option<String>,
    pub profile_pic: Option<String>,
    /// SHA-256 hex digest, never the raw token
    pub reset_token: Option<String>,
    pub reset_token_expires_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> crate::auth::application::domain::entities::User {
        use crate::auth::application::domain::entities::{
            FederatedIdentity, OAuthProvider, Role, User, UserId,
        };

        // A half-written identity (provider without id) is treated as none
        let identity = match (self.provider, self.provider_id) {
            (Some(provider), Some(provider_id)) => provider
                .parse::<OAuthProvider>()
                .ok()
                .map(|provider| FederatedIdentity {
                    provider,
                    provider_id,
                }),
            _ => None,
        };

        User {
            id: UserId::from(self.id),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            wallet_balance: self.wallet_balance,
            role: Role::from_db(&self.role),
            identity,
            profile_pic: self.profile_pic,
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}
