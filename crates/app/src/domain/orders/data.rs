//! Order Data

use std::num::TryFromIntError;

use foodcart::{
    orders::{OrderDraft, OrderStatus},
    uuids::{ProductUuid, RestaurantUuid, UserUuid},
};
use smallvec::SmallVec;

use crate::domain::{
    amounts::from_money,
    orders::records::{OrderItemUuid, OrderUuid},
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub status: OrderStatus,
    pub subtotal_price: u64,
    pub total_discounts: u64,
    pub total_price: u64,
    pub delivery_fee: u64,
    pub delivery_time_minutes: u32,
    pub items: SmallVec<[NewOrderItem; 8]>,
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

impl TryFrom<&OrderDraft<'_>> for NewOrder {
    type Error = TryFromIntError;

    fn try_from(draft: &OrderDraft<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            uuid: OrderUuid::new(),
            user_uuid: draft.user_uuid,
            restaurant_uuid: draft.restaurant_uuid,
            status: draft.status,
            subtotal_price: from_money(&draft.subtotal_price)?,
            total_discounts: from_money(&draft.total_discounts)?,
            total_price: from_money(&draft.total_price)?,
            delivery_fee: from_money(&draft.delivery_fee)?,
            delivery_time_minutes: draft.delivery_time_minutes,
            items: draft
                .line_items
                .iter()
                .map(|item| NewOrderItem {
                    uuid: OrderItemUuid::new(),
                    product_uuid: item.product_uuid,
                    quantity: item.quantity,
                })
                .collect(),
        })
    }
}
