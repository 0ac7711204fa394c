//! Orders service.

use async_trait::async_trait;
use foodcart::uuids::UserUuid;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::orders::{
        data::NewOrder,
        errors::OrdersServiceError,
        records::{OrderItemRecord, OrderRecord, OrderUuid},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders: PgOrdersRepository,
    items: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders: PgOrdersRepository::new(),
            items: PgOrderItemsRepository::new(),
        }
    }
}

fn attach_items(orders: &mut [OrderRecord], items: Vec<OrderItemRecord>) {
    for item in items {
        if let Some(order) = orders.iter_mut().find(|order| order.uuid == item.order_uuid) {
            order.items.push(item);
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        let mut tx = self.db.begin().await?;

        let mut created = self.orders.create_order(&mut tx, &order).await?;

        self.items
            .create_order_items(&mut tx, created.uuid, &order.items)
            .await?;

        created.items = self.items.get_order_items(&mut tx, &[created.uuid]).await?;

        tx.commit().await?;

        debug!(
            order = %created.uuid,
            user = %created.user_uuid,
            items = created.items.len(),
            "order created"
        );

        Ok(created)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut found = self.orders.get_order(&mut tx, order).await?;

        found.items = self.items.get_order_items(&mut tx, &[found.uuid]).await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn list_user_orders(
        &self,
        user: UserUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut orders = self.orders.list_user_orders(&mut tx, user).await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();
        let items = self.items.get_order_items(&mut tx, &uuids).await?;

        tx.commit().await?;

        attach_items(&mut orders, items);

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates an order and its items in one transaction.
    async fn create_order(&self, order: NewOrder) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieves a user's orders with their items, newest first.
    async fn list_user_orders(&self, user: UserUuid)
    -> Result<Vec<OrderRecord>, OrdersServiceError>;
}
