use sea_orm::entity::prelude::*;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::catalog::adapter::outgoing::sea_orm_entity::packages;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// NULL for guest checkout
    pub user_id: Option<Uuid>,
    pub package_id: i32,
    pub player_uid: String,
    pub status: String,
    pub payment_method: String,
    pub transaction_id: Option<String>,
    /// Snapshot of the package price at purchase time
    pub price: i64,
    pub created_at: DateTimeWithTimeZone,
    pub completed_at: Option<DateTimeWithTimeZone>,
    pub contact_number: Option<String>,
    #[sea_orm(unique)]
    pub order_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "users::Entity",
        from = "Column::UserId",
        to = "users::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Users,

    #[sea_orm(
        belongs_to = "packages::Entity",
        from = "Column::PackageId",
        to = "packages::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Packages,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Packages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
