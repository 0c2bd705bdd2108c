use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::orders::{Column, Entity, Relation};
use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::catalog::adapter::outgoing::sea_orm_entity::packages;
use crate::order::application::domain::{ContactNumber, OrderStatus, OrderView, UnknownStatus};
use crate::order::application::ports::outgoing::{OrderQuery, OrderQueryError};

#[derive(Clone, Debug)]
pub struct OrderQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn fetch(&self, select: Select<Entity>) -> Result<Vec<OrderView>, OrderQueryError> {
        select
            .into_model::<OrderRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(OrderView::try_from)
            .collect()
    }
}

#[derive(Debug, FromQueryResult)]
struct OrderRow {
    id: i32,
    user_id: Option<Uuid>,
    user_name: Option<String>,
    package_id: i32,
    package_name: String,
    player_uid: String,
    status: String,
    payment_method: String,
    transaction_id: Option<String>,
    contact_number: Option<String>,
    order_code: Option<String>,
    price: i64,
    created_at: DateTimeWithTimeZone,
    completed_at: Option<DateTimeWithTimeZone>,
}

impl TryFrom<OrderRow> for OrderView {
    type Error = OrderQueryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status: OrderStatus = row.status.parse().map_err(|e: UnknownStatus| {
            OrderQueryError::CorruptRow {
                id: row.id,
                reason: e.to_string(),
            }
        })?;

        Ok(OrderView {
            id: row.id,
            order_code: row.order_code,
            user_id: row.user_id,
            user_name: row.user_name,
            package_id: row.package_id,
            package_name: row.package_name,
            player_uid: row.player_uid,
            status,
            payment_method: row.payment_method,
            transaction_id: row.transaction_id,
            contact_number: row.contact_number,
            price: row.price,
            created_at: row.created_at.into(),
            completed_at: row.completed_at.map(Into::into),
        })
    }
}

fn map_db_err(e: DbErr) -> OrderQueryError {
    OrderQueryError::DatabaseError(e.to_string())
}

/// Orders with package name and (nullable) owner name, newest first.
/// The users join is LEFT so guest orders are kept.
fn joined() -> Select<Entity> {
    Entity::find()
        .select_only()
        .columns([
            Column::Id,
            Column::UserId,
            Column::PackageId,
            Column::PlayerUid,
            Column::Status,
            Column::PaymentMethod,
            Column::TransactionId,
            Column::ContactNumber,
            Column::OrderCode,
            Column::Price,
            Column::CreatedAt,
            Column::CompletedAt,
        ])
        .column_as(packages::Column::Name, "package_name")
        .column_as(users::Column::Name, "user_name")
        .join(JoinType::InnerJoin, Relation::Packages.def())
        .join(JoinType::LeftJoin, Relation::Users.def())
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
}

#[async_trait]
impl OrderQuery for OrderQueryPostgres {
    async fn find_status(&self, order_id: i32) -> Result<Option<OrderStatus>, OrderQueryError> {
        let status = Entity::find_by_id(order_id)
            .select_only()
            .column(Column::Status)
            .into_tuple::<String>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        status
            .map(|s| {
                s.parse().map_err(|e: UnknownStatus| {
                    OrderQueryError::CorruptRow {
                        id: order_id,
                        reason: e.to_string(),
                    }
                })
            })
            .transpose()
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OrderView>, OrderQueryError> {
        self.fetch(joined().filter(Column::UserId.eq(user_id.value())))
            .await
    }

    async fn track(
        &self,
        order_code: &str,
        contact_number: Option<&ContactNumber>,
    ) -> Result<Vec<OrderView>, OrderQueryError> {
        let matches = Condition::any()
            .add(Column::OrderCode.eq(order_code))
            .add_option(contact_number.map(|c| Column::ContactNumber.eq(c.as_str())));

        self.fetch(joined().filter(matches)).await
    }

    async fn list_by_codes(&self, codes: &[String]) -> Result<Vec<OrderView>, OrderQueryError> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        self.fetch(joined().filter(Column::OrderCode.is_in(codes.iter().cloned())))
            .await
    }

    async fn list_all(&self) -> Result<Vec<OrderView>, OrderQueryError> {
        self.fetch(joined()).await
    }
}
