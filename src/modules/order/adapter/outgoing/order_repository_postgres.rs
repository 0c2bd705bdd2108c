use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::orders::{ActiveModel as OrderActiveModel, Column, Entity};
use crate::auth::adapter::outgoing::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::order::application::domain::{NewOrder, OrderCode, OrderStatus, PlacedOrder};
use crate::order::application::ports::outgoing::{OrderRepository, OrderRepositoryError};
use crate::shared::database::is_unique_violation;

#[derive(Clone, Debug)]
pub struct OrderRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> OrderRepositoryError {
        OrderRepositoryError::DatabaseError(e.to_string())
    }

    async fn insert_order<C>(conn: &C, order: NewOrder) -> Result<PlacedOrder, OrderRepositoryError>
    where
        C: ConnectionTrait,
    {
        let payment_method = order.payment_method;

        let active = OrderActiveModel {
            id: NotSet,
            user_id: Set(order.user_id.map(|u| u.value())),
            package_id: Set(order.package_id),
            player_uid: Set(order.player_uid.into_inner()),
            status: Set(OrderStatus::Pending.as_str().to_string()),
            payment_method: Set(payment_method.as_str().to_string()),
            transaction_id: Set(order.transaction_id),
            price: Set(order.price),
            created_at: Set(order.created_at.fixed_offset()),
            completed_at: Set(None),
            contact_number: Set(order.contact_number.map(|c| c.into_inner())),
            order_code: Set(Some(order.order_code.into_inner())),
        };

        let inserted = active.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                return OrderRepositoryError::DuplicateOrderCode;
            }
            Self::map_db_err(e)
        })?;

        Ok(PlacedOrder {
            id: inserted.id,
            order_code: OrderCode::from_stored(inserted.order_code.unwrap_or_default()),
            payment_method,
            price: inserted.price,
        })
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place_wallet_order(
        &self,
        payer: UserId,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrderRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        // Conditional debit: two concurrent orders cannot both pass the check
        let debit = UserEntity::update_many()
            .col_expr(
                UserColumn::WalletBalance,
                Expr::col(UserColumn::WalletBalance).sub(order.price),
            )
            .filter(UserColumn::Id.eq(payer.value()))
            .filter(UserColumn::WalletBalance.gte(order.price))
            .exec(&txn)
            .await;

        let debit = match debit {
            Ok(result) => result,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        if debit.rows_affected == 0 {
            let payer_row = UserEntity::find_by_id(payer.value()).one(&txn).await;
            let _ = txn.rollback().await;
            return match payer_row {
                Ok(Some(_)) => Err(OrderRepositoryError::InsufficientBalance),
                Ok(None) => Err(OrderRepositoryError::UserNotFound),
                Err(e) => Err(Self::map_db_err(e)),
            };
        }

        let placed = match Self::insert_order(&txn, order).await {
            Ok(placed) => placed,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(placed)
    }

    async fn place_manual_order(&self, order: NewOrder) -> Result<PlacedOrder, OrderRepositoryError> {
        Self::insert_order(&*self.db, order).await
    }

    async fn update_status_if(
        &self,
        order_id: i32,
        expected: OrderStatus,
        next: OrderStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, OrderRepositoryError> {
        let mut update = Entity::update_many()
            .col_expr(Column::Status, Expr::value(next.as_str()))
            .filter(Column::Id.eq(order_id))
            .filter(Column::Status.eq(expected.as_str()));

        if let Some(at) = completed_at {
            update = update.col_expr(Column::CompletedAt, Expr::value(Some(at.fixed_offset())));
        }

        let result = update.exec(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(result.rows_affected == 1)
    }
}
