use sea_orm::entity::prelude::*;

use crate::catalog::application::domain::Package;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "packages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category: String,
    pub name: String,
    pub price: i64,
    pub diamonds: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::order::adapter::outgoing::sea_orm_entity::orders::Entity")]
    Orders,
}

impl Related<crate::order::adapter::outgoing::sea_orm_entity::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Package {
    fn from(model: Model) -> Self {
        Package {
            id: model.id,
            category: model.category,
            name: model.name,
            price: model.price,
            diamonds: model.diamonds,
        }
    }
}
