//! Orders Repository

use std::str::FromStr;

use foodcart::{
    orders::OrderStatus,
    uuids::{RestaurantUuid, UserUuid},
};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    amounts::{bind_signed, try_get_unsigned},
    orders::{
        data::NewOrder,
        records::{OrderRecord, OrderUuid},
    },
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_USER_ORDERS_SQL: &str = include_str!("../sql/list_user_orders.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.user_uuid.into_uuid())
            .bind(order.restaurant_uuid.into_uuid())
            .bind(order.status.as_str())
            .bind(bind_signed::<u64, i64>(order.subtotal_price, "subtotal_price")?)
            .bind(bind_signed::<u64, i64>(order.total_discounts, "total_discounts")?)
            .bind(bind_signed::<u64, i64>(order.total_price, "total_price")?)
            .bind(bind_signed::<u64, i64>(order.delivery_fee, "delivery_fee")?)
            .bind(bind_signed::<u32, i32>(
                order.delivery_time_minutes,
                "delivery_time_minutes",
            )?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_user_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_USER_ORDERS_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: &str = row.try_get("status")?;

        let status = OrderStatus::from_str(status).map_err(|e| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            restaurant_uuid: RestaurantUuid::from_uuid(row.try_get("restaurant_uuid")?),
            status,
            subtotal_price: try_get_unsigned::<i64, _>(row, "subtotal_price")?,
            total_discounts: try_get_unsigned::<i64, _>(row, "total_discounts")?,
            total_price: try_get_unsigned::<i64, _>(row, "total_price")?,
            delivery_fee: try_get_unsigned::<i64, _>(row, "delivery_fee")?,
            delivery_time_minutes: try_get_unsigned::<i32, _>(row, "delivery_time_minutes")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            items: Vec::new(),
        })
    }
}
