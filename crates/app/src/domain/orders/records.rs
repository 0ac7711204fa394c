//! Order Records

use foodcart::{
    orders::OrderStatus,
    uuids::{ProductUuid, RestaurantUuid, TypedUuid, UserUuid},
};
use jiff::Timestamp;
use serde::Serialize;

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub status: OrderStatus,
    pub subtotal_price: u64,
    pub total_discounts: u64,
    pub total_price: u64,
    pub delivery_fee: u64,
    pub delivery_time_minutes: u32,
    pub created_at: Timestamp,
    pub items: Vec<OrderItemRecord>,
}

/// Order Item Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}
