//! Order Items Repository

use foodcart::uuids::ProductUuid;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::{
    amounts::{bind_signed, try_get_unsigned},
    orders::{
        data::NewOrderItem,
        records::{OrderItemRecord, OrderItemUuid, OrderUuid},
    },
};

const CREATE_ORDER_ITEMS_SQL: &str = include_str!("../sql/create_order_items.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("../sql/get_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderItemsRepository;

impl PgOrderItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert all items of an order in one statement, keeping their order.
    pub(crate) async fn create_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        items: &[NewOrderItem],
    ) -> Result<u64, sqlx::Error> {
        let mut uuids = Vec::with_capacity(items.len());
        let mut products = Vec::with_capacity(items.len());
        let mut quantities = Vec::with_capacity(items.len());
        let mut positions = Vec::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            uuids.push(item.uuid.into_uuid());
            products.push(item.product_uuid.into_uuid());
            quantities.push(bind_signed::<u32, i32>(item.quantity, "quantity")?);
            positions.push(bind_signed::<usize, i32>(position, "position")?);
        }

        let rows_affected = query(CREATE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .bind(uuids)
            .bind(products)
            .bind(quantities)
            .bind(positions)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Items of the given orders, grouped by order and in insertion order.
    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<Vec<OrderItemRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = orders.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, OrderItemRecord>(GET_ORDER_ITEMS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity: try_get_unsigned::<i32, _>(row, "quantity")?,
        })
    }
}
