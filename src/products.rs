//! Products

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, percent_of, percentage_from_points},
    uuids::{ProductUuid, RestaurantUuid},
};

/// The restaurant a product is sold by, as needed for delivery pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantRef<'a> {
    /// Restaurant id
    pub uuid: RestaurantUuid,

    /// Restaurant name
    pub name: String,

    /// Flat delivery fee; zero means free delivery.
    pub delivery_fee: Money<'a, Currency>,

    /// Estimated delivery time in minutes.
    pub delivery_time_minutes: u32,
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub uuid: ProductUuid,

    /// Product name
    pub name: String,

    /// Unit price before discount
    pub price: Money<'a, Currency>,

    /// Discount in whole percentage points (`0..=100`).
    pub discount_percentage: u8,

    /// Restaurant selling this product
    pub restaurant: RestaurantRef<'a>,
}

impl<'a> Product<'a> {
    /// Discount taken off a single unit.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount percentage is invalid or cannot be applied.
    pub fn unit_discount(&self) -> Result<Money<'a, Currency>, PricingError> {
        let percent = percentage_from_points(self.discount_percentage)?;

        percent_of(&self.price, percent)
    }

    /// Unit price after discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount cannot be applied.
    pub fn discounted_price(&self) -> Result<Money<'a, Currency>, PricingError> {
        Ok(self.price.sub(self.unit_discount()?)?)
    }

    /// Whether the product is currently sold at a discount.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0
    }
}
