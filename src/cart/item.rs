//! Cart Products

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{PricingError, percent_of, percentage_from_points, times},
    products::{Product, RestaurantRef},
    uuids::ProductUuid,
};

/// A product in the cart together with the quantity the user chose.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartProduct<'a> {
    pub(super) fn new(product: Product<'a>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// The underlying product.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Product id
    pub fn uuid(&self) -> ProductUuid {
        self.product.uuid
    }

    /// Chosen quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(super) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// The restaurant this product is delivered from.
    pub fn restaurant(&self) -> &RestaurantRef<'a> {
        &self.product.restaurant
    }

    /// Unit price × quantity, before discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amount overflows.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        times(&self.product.price, self.quantity)
    }

    /// Discount on the whole line, rounded once to the nearest minor unit.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount is invalid or the amount overflows.
    pub fn discount(&self) -> Result<Money<'a, Currency>, PricingError> {
        let percent = percentage_from_points(self.product.discount_percentage)?;

        percent_of(&self.subtotal()?, percent)
    }

    /// Line subtotal minus the line discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the discount is invalid or the amount overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, PricingError> {
        Ok(self.subtotal()?.sub(self.discount()?)?)
    }
}

/// Quantity changes a single cart line can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartItemAction {
    /// Add one more unit.
    Increase,

    /// Take one unit away, removing the line at zero.
    Decrease,

    /// Remove the line regardless of quantity.
    Remove,
}
