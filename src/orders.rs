//! Orders

use std::{fmt, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    cart::{Cart, CartProduct},
    pricing::PricingError,
    uuids::{ProductUuid, RestaurantUuid, UserUuid},
};

/// Errors that can occur while snapshotting a cart into an order.
#[derive(Debug, Error, PartialEq)]
pub enum OrderDraftError {
    /// There is nothing to order.
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    /// Cart totals could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted by the restaurant. Checkout creates orders in this state.
    Confirmed,

    /// Cancelled before delivery.
    Canceled,

    /// Being prepared by the restaurant.
    Preparing,

    /// Out for delivery.
    Delivering,

    /// Delivered.
    Completed,
}

impl OrderStatus {
    /// Storage representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown order status string.
#[derive(Debug, Error, PartialEq)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CONFIRMED" => Ok(OrderStatus::Confirmed),
            "CANCELED" => Ok(OrderStatus::Canceled),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "DELIVERING" => Ok(OrderStatus::Delivering),
            "COMPLETED" => Ok(OrderStatus::Completed),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}

/// A product and quantity persisted as part of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Ordered product
    pub product_uuid: ProductUuid,

    /// Ordered quantity
    pub quantity: u32,
}

impl From<&CartProduct<'_>> for LineItem {
    fn from(line: &CartProduct<'_>) -> Self {
        Self {
            product_uuid: line.uuid(),
            quantity: line.quantity(),
        }
    }
}

/// Snapshot of a cart at the moment the user confirms checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft<'a> {
    /// Ordering user
    pub user_uuid: UserUuid,

    /// Restaurant fulfilling the order
    pub restaurant_uuid: RestaurantUuid,

    /// Status the order is created with
    pub status: OrderStatus,

    /// Sum of unit price × quantity
    pub subtotal_price: Money<'a, Currency>,

    /// Sum of line discounts
    pub total_discounts: Money<'a, Currency>,

    /// Amount charged, including delivery
    pub total_price: Money<'a, Currency>,

    /// Delivery fee charged
    pub delivery_fee: Money<'a, Currency>,

    /// Promised delivery time
    pub delivery_time_minutes: u32,

    /// One entry per cart line
    pub line_items: SmallVec<[LineItem; 8]>,
}

impl<'a> OrderDraft<'a> {
    /// Snapshot `cart` into a confirmed order for `user`.
    ///
    /// # Errors
    ///
    /// - [`OrderDraftError::EmptyCart`]: the cart has no products.
    /// - [`OrderDraftError::Pricing`]: the cart totals could not be calculated.
    pub fn from_cart(cart: &Cart<'a>, user: UserUuid) -> Result<Self, OrderDraftError> {
        let restaurant = cart.restaurant().ok_or(OrderDraftError::EmptyCart)?;

        Ok(Self {
            user_uuid: user,
            restaurant_uuid: restaurant.uuid,
            status: OrderStatus::Confirmed,
            subtotal_price: cart.subtotal_price()?,
            total_discounts: cart.total_discounts()?,
            total_price: cart.total_price()?,
            delivery_fee: restaurant.delivery_fee,
            delivery_time_minutes: restaurant.delivery_time_minutes,
            line_items: cart.iter().map(LineItem::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use crate::products::{Product, RestaurantRef};

    use super::*;

    fn burger_cart() -> Result<(Cart<'static>, ProductUuid, ProductUuid), crate::cart::CartError> {
        let restaurant = RestaurantRef {
            uuid: RestaurantUuid::new(),
            name: "Burger Place".to_string(),
            delivery_fee: Money::from_minor(5_00, BRL),
            delivery_time_minutes: 40,
        };

        let burger = Product {
            uuid: ProductUuid::new(),
            name: "Burger".to_string(),
            price: Money::from_minor(30_00, BRL),
            discount_percentage: 10,
            restaurant: restaurant.clone(),
        };

        let soda = Product {
            uuid: ProductUuid::new(),
            name: "Soda".to_string(),
            price: Money::from_minor(6_00, BRL),
            discount_percentage: 0,
            restaurant,
        };

        let (burger_uuid, soda_uuid) = (burger.uuid, soda.uuid);

        let mut cart = Cart::new(BRL);
        cart.add_product(burger, 2)?;
        cart.add_product(soda, 1)?;

        Ok((cart, burger_uuid, soda_uuid))
    }

    #[test]
    fn draft_snapshots_cart_totals() -> TestResult {
        let (cart, burger, soda) = burger_cart()?;
        let user = UserUuid::new();

        let draft = OrderDraft::from_cart(&cart, user)?;

        assert_eq!(draft.user_uuid, user);
        assert_eq!(draft.status, OrderStatus::Confirmed);
        assert_eq!(draft.subtotal_price, Money::from_minor(66_00, BRL));
        assert_eq!(draft.total_discounts, Money::from_minor(6_00, BRL));
        assert_eq!(draft.total_price, Money::from_minor(65_00, BRL));
        assert_eq!(draft.delivery_fee, Money::from_minor(5_00, BRL));
        assert_eq!(draft.delivery_time_minutes, 40);
        assert_eq!(
            draft.line_items.as_slice(),
            &[
                LineItem {
                    product_uuid: burger,
                    quantity: 2
                },
                LineItem {
                    product_uuid: soda,
                    quantity: 1
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_cart_cannot_be_drafted() {
        let cart = Cart::new(BRL);

        assert_eq!(
            OrderDraft::from_cart(&cart, UserUuid::new()),
            Err(OrderDraftError::EmptyCart)
        );
    }

    #[test]
    fn status_round_trips_through_storage_names() -> TestResult {
        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Canceled,
            OrderStatus::Preparing,
            OrderStatus::Delivering,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        assert!("SHIPPED".parse::<OrderStatus>().is_err());

        Ok(())
    }
}
