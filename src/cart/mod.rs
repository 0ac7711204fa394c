//! Cart
//!
//! The cart is the single owner of the in-progress order. Callers hold it and pass it
//! by reference to whatever needs to read or change it; all totals are derived from the
//! current product list on every read.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{PricingError, sum},
    products::{Product, RestaurantRef},
    uuids::{ProductUuid, RestaurantUuid},
};

mod item;

pub use item::{CartItemAction, CartProduct};

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Products must be added with a quantity of at least one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    /// The product is priced in a different currency than the cart (product currency, cart currency).
    #[error("product has currency {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// The cart can only hold products from one restaurant at a time.
    #[error("cart holds products from restaurant {cart}, cannot add one from {product}")]
    DifferentRestaurant {
        /// Restaurant of the products already in the cart.
        cart: RestaurantUuid,

        /// Restaurant of the rejected product.
        product: RestaurantUuid,
    },

    /// The product is not in the cart.
    #[error("product {0} is not in the cart")]
    ProductNotInCart(ProductUuid),

    /// The quantity would exceed `u32::MAX`.
    #[error("quantity for product {0} overflowed")]
    QuantityOverflow(ProductUuid),
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    products: Vec<CartProduct<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in `currency`.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            products: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` units of `product`, merging with an existing line for the same product.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` is zero.
    /// - [`CartError::CurrencyMismatch`]: the product is not priced in the cart currency.
    /// - [`CartError::DifferentRestaurant`]: the cart already holds another restaurant's products.
    /// - [`CartError::QuantityOverflow`]: the merged quantity does not fit in a `u32`.
    pub fn add_product(&mut self, product: Product<'a>, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        self.ensure_currency(&product)?;

        if let Some(current) = self.restaurant()
            && current.uuid != product.restaurant.uuid
        {
            return Err(CartError::DifferentRestaurant {
                cart: current.uuid,
                product: product.restaurant.uuid,
            });
        }

        if let Some(existing) = self.find_mut(product.uuid) {
            let merged = existing
                .quantity()
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow(product.uuid))?;

            existing.set_quantity(merged);

            return Ok(());
        }

        self.products.push(CartProduct::new(product, quantity));

        Ok(())
    }

    /// Empty the cart, then add `product`. Used to switch to another restaurant.
    ///
    /// The cart is left untouched if the product is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] or [`CartError::CurrencyMismatch`].
    pub fn replace_with(&mut self, product: Product<'a>, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        self.ensure_currency(&product)?;
        self.clear();
        self.products.push(CartProduct::new(product, quantity));

        Ok(())
    }

    /// Add one unit of a product already in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCart`] or [`CartError::QuantityOverflow`].
    pub fn increase_quantity(&mut self, product: ProductUuid) -> Result<(), CartError> {
        let line = self
            .find_mut(product)
            .ok_or(CartError::ProductNotInCart(product))?;

        let quantity = line
            .quantity()
            .checked_add(1)
            .ok_or(CartError::QuantityOverflow(product))?;

        line.set_quantity(quantity);

        Ok(())
    }

    /// Remove one unit of a product. A line at quantity 1 is removed entirely.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCart`] if the product is not in the cart.
    pub fn decrease_quantity(&mut self, product: ProductUuid) -> Result<(), CartError> {
        let idx = self
            .position(product)
            .ok_or(CartError::ProductNotInCart(product))?;

        let Some(line) = self.products.get_mut(idx) else {
            return Err(CartError::ProductNotInCart(product));
        };

        if line.quantity() > 1 {
            line.set_quantity(line.quantity() - 1);
        } else {
            self.products.remove(idx);
        }

        Ok(())
    }

    /// Remove a product regardless of its quantity, returning the removed line.
    pub fn remove_product(&mut self, product: ProductUuid) -> Option<CartProduct<'a>> {
        let idx = self.position(product)?;

        Some(self.products.remove(idx))
    }

    /// Apply a line item action to a product in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCart`] if the product is not in the cart.
    pub fn apply(&mut self, product: ProductUuid, action: CartItemAction) -> Result<(), CartError> {
        match action {
            CartItemAction::Increase => self.increase_quantity(product),
            CartItemAction::Decrease => self.decrease_quantity(product),
            CartItemAction::Remove => self
                .remove_product(product)
                .map(|_| ())
                .ok_or(CartError::ProductNotInCart(product)),
        }
    }

    /// Remove every product.
    pub fn clear(&mut self) {
        self.products.clear();
    }

    /// Sum of unit price × quantity, before discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amounts overflow.
    pub fn subtotal_price(&self) -> Result<Money<'a, Currency>, PricingError> {
        sum(self.currency, self.products.iter().map(CartProduct::subtotal))
    }

    /// Sum of every line's discount.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a discount is invalid or the amounts overflow.
    pub fn total_discounts(&self) -> Result<Money<'a, Currency>, PricingError> {
        sum(self.currency, self.products.iter().map(CartProduct::discount))
    }

    /// Delivery fee of the cart's restaurant, or zero for an empty cart.
    pub fn delivery_fee(&self) -> Money<'a, Currency> {
        self.restaurant()
            .map_or(Money::from_minor(0, self.currency), |restaurant| {
                restaurant.delivery_fee
            })
    }

    /// Subtotal minus discounts plus delivery fee.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a discount is invalid or the amounts overflow.
    pub fn total_price(&self) -> Result<Money<'a, Currency>, PricingError> {
        let total = self
            .subtotal_price()?
            .sub(self.total_discounts()?)?
            .add(self.delivery_fee())?;

        Ok(total)
    }

    /// The restaurant every product in the cart comes from.
    pub fn restaurant(&self) -> Option<&RestaurantRef<'a>> {
        self.products.first().map(CartProduct::restaurant)
    }

    /// Quantity of a product, or zero if it is not in the cart.
    pub fn quantity_of(&self, product: ProductUuid) -> u32 {
        self.products
            .iter()
            .find(|line| line.uuid() == product)
            .map_or(0, CartProduct::quantity)
    }

    /// Cart lines in the order they were first added.
    pub fn products(&self) -> &[CartProduct<'a>] {
        &self.products
    }

    /// Iterate over the cart lines.
    pub fn iter(&self) -> impl Iterator<Item = &CartProduct<'a>> {
        self.products.iter()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn ensure_currency(&self, product: &Product<'_>) -> Result<(), CartError> {
        for amount in [&product.price, &product.restaurant.delivery_fee] {
            let currency = amount.currency();

            if currency != self.currency {
                return Err(CartError::CurrencyMismatch(
                    currency.iso_alpha_code,
                    self.currency.iso_alpha_code,
                ));
            }
        }

        Ok(())
    }

    fn position(&self, product: ProductUuid) -> Option<usize> {
        self.products.iter().position(|line| line.uuid() == product)
    }

    fn find_mut(&mut self, product: ProductUuid) -> Option<&mut CartProduct<'a>> {
        self.products.iter_mut().find(|line| line.uuid() == product)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{BRL, USD};
    use testresult::TestResult;

    use super::*;

    fn restaurant(fee: i64) -> RestaurantRef<'static> {
        RestaurantRef {
            uuid: RestaurantUuid::new(),
            name: "Cantina".to_string(),
            delivery_fee: Money::from_minor(fee, BRL),
            delivery_time_minutes: 45,
        }
    }

    fn product(restaurant: &RestaurantRef<'static>, price: i64, discount: u8) -> Product<'static> {
        Product {
            uuid: ProductUuid::new(),
            name: "Lasanha".to_string(),
            price: Money::from_minor(price, BRL),
            discount_percentage: discount,
            restaurant: restaurant.clone(),
        }
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(BRL);

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.currency(), BRL);
        assert!(cart.restaurant().is_none());
    }

    #[test]
    fn adding_same_product_merges_quantities() -> TestResult {
        let restaurant = restaurant(5_00);
        let lasanha = product(&restaurant, 20_00, 0);
        let mut cart = Cart::new(BRL);

        cart.add_product(lasanha.clone(), 1)?;
        cart.add_product(lasanha.clone(), 3)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(lasanha.uuid), 4);

        Ok(())
    }

    #[test]
    fn lines_keep_insertion_order() -> TestResult {
        let restaurant = restaurant(0);
        let first = product(&restaurant, 1_00, 0);
        let second = product(&restaurant, 2_00, 0);
        let mut cart = Cart::new(BRL);

        cart.add_product(first.clone(), 1)?;
        cart.add_product(second.clone(), 1)?;
        cart.add_product(first.clone(), 1)?;

        let order: Vec<_> = cart.iter().map(CartProduct::uuid).collect();

        assert_eq!(order, vec![first.uuid, second.uuid]);

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let restaurant = restaurant(0);
        let mut cart = Cart::new(BRL);

        let result = cart.add_product(product(&restaurant, 1_00, 0), 0);

        assert_eq!(result, Err(CartError::ZeroQuantity));
        assert!(cart.is_empty());
    }

    #[test]
    fn other_restaurant_is_rejected_and_cart_unchanged() -> TestResult {
        let first = restaurant(5_00);
        let second = restaurant(7_00);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&first, 10_00, 0), 1)?;

        let result = cart.add_product(product(&second, 10_00, 0), 1);

        assert_eq!(
            result,
            Err(CartError::DifferentRestaurant {
                cart: first.uuid,
                product: second.uuid,
            })
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.delivery_fee(), Money::from_minor(5_00, BRL));

        Ok(())
    }

    #[test]
    fn replace_with_switches_restaurant() -> TestResult {
        let first = restaurant(5_00);
        let second = restaurant(7_00);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&first, 10_00, 0), 2)?;
        cart.replace_with(product(&second, 3_00, 0), 1)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.restaurant().map(|r| r.uuid), Some(second.uuid));
        assert_eq!(cart.delivery_fee(), Money::from_minor(7_00, BRL));

        Ok(())
    }

    #[test]
    fn currency_mismatch_is_rejected() {
        let mut cart = Cart::new(BRL);
        let mut dollars = product(&restaurant(0), 1_00, 0);
        dollars.price = Money::from_minor(1_00, USD);

        let result = cart.add_product(dollars, 1);

        assert_eq!(
            result,
            Err(CartError::CurrencyMismatch(
                USD.iso_alpha_code,
                BRL.iso_alpha_code
            ))
        );
    }

    #[test]
    fn decreasing_last_unit_removes_line() -> TestResult {
        let restaurant = restaurant(0);
        let item = product(&restaurant, 1_00, 0);
        let mut cart = Cart::new(BRL);

        cart.add_product(item.clone(), 2)?;
        cart.decrease_quantity(item.uuid)?;

        assert_eq!(cart.quantity_of(item.uuid), 1);

        cart.decrease_quantity(item.uuid)?;

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(item.uuid), 0);

        Ok(())
    }

    #[test]
    fn unknown_product_quantity_change_errors() {
        let mut cart = Cart::new(BRL);
        let missing = ProductUuid::new();

        assert_eq!(
            cart.increase_quantity(missing),
            Err(CartError::ProductNotInCart(missing))
        );
        assert_eq!(
            cart.decrease_quantity(missing),
            Err(CartError::ProductNotInCart(missing))
        );
    }

    #[test]
    fn remove_ignores_quantity() -> TestResult {
        let restaurant = restaurant(0);
        let item = product(&restaurant, 1_00, 0);
        let mut cart = Cart::new(BRL);

        cart.add_product(item.clone(), 5)?;

        let removed = cart.remove_product(item.uuid);

        assert_eq!(removed.map(|line| line.quantity()), Some(5));
        assert!(cart.is_empty());
        assert!(cart.remove_product(item.uuid).is_none());

        Ok(())
    }

    #[test]
    fn apply_dispatches_actions() -> TestResult {
        let restaurant = restaurant(0);
        let item = product(&restaurant, 1_00, 0);
        let mut cart = Cart::new(BRL);

        cart.add_product(item.clone(), 1)?;

        cart.apply(item.uuid, CartItemAction::Increase)?;
        assert_eq!(cart.quantity_of(item.uuid), 2);

        cart.apply(item.uuid, CartItemAction::Decrease)?;
        assert_eq!(cart.quantity_of(item.uuid), 1);

        cart.apply(item.uuid, CartItemAction::Remove)?;
        assert!(cart.is_empty());

        assert_eq!(
            cart.apply(item.uuid, CartItemAction::Remove),
            Err(CartError::ProductNotInCart(item.uuid))
        );

        Ok(())
    }

    #[test]
    fn totals_with_delivery_fee() -> TestResult {
        let restaurant = restaurant(5_00);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&restaurant, 20_00, 0), 2)?;

        assert_eq!(cart.subtotal_price()?, Money::from_minor(40_00, BRL));
        assert_eq!(cart.total_discounts()?, Money::from_minor(0, BRL));
        assert_eq!(cart.total_price()?, Money::from_minor(45_00, BRL));

        Ok(())
    }

    #[test]
    fn totals_with_discount_and_free_delivery() -> TestResult {
        let restaurant = restaurant(0);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&restaurant, 10_00, 10), 1)?;

        assert_eq!(cart.subtotal_price()?, Money::from_minor(10_00, BRL));
        assert_eq!(cart.total_discounts()?, Money::from_minor(1_00, BRL));
        assert_eq!(cart.delivery_fee(), Money::from_minor(0, BRL));
        assert_eq!(cart.total_price()?, Money::from_minor(9_00, BRL));

        Ok(())
    }

    #[test]
    fn line_discount_is_rounded_once_per_line() -> TestResult {
        let restaurant = restaurant(0);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&restaurant, 15, 10), 100)?;

        let line = &cart.products()[0];

        assert_eq!(line.subtotal()?, Money::from_minor(15_00, BRL));
        assert_eq!(line.discount()?, Money::from_minor(1_50, BRL));
        assert_eq!(line.total()?, Money::from_minor(13_50, BRL));
        assert_eq!(cart.total_discounts()?, Money::from_minor(1_50, BRL));
        assert_eq!(cart.total_price()?, Money::from_minor(13_50, BRL));

        Ok(())
    }

    #[test]
    fn odd_quantity_rounds_half_cent_line_discount() -> TestResult {
        let restaurant = restaurant(0);
        let mut cart = Cart::new(BRL);

        // 3 × 15 = 45, 10% of which is 4.5.
        cart.add_product(product(&restaurant, 15, 10), 3)?;

        assert_eq!(cart.total_discounts()?, Money::from_minor(5, BRL));
        assert_eq!(cart.total_price()?, Money::from_minor(40, BRL));

        Ok(())
    }

    #[test]
    fn clear_zeroes_every_total() -> TestResult {
        let restaurant = restaurant(5_00);
        let mut cart = Cart::new(BRL);

        cart.add_product(product(&restaurant, 10_00, 25), 3)?;
        cart.clear();

        let zero = Money::from_minor(0, BRL);

        assert!(cart.products().is_empty());
        assert_eq!(cart.subtotal_price()?, zero);
        assert_eq!(cart.total_discounts()?, zero);
        assert_eq!(cart.delivery_fee(), zero);
        assert_eq!(cart.total_price()?, zero);

        Ok(())
    }
}
