//! Cart line item view

use serde::Serialize;

use crate::{
    cart::{Cart, CartError, CartItemAction, CartProduct},
    currency::format_currency,
    pricing::PricingError,
    uuids::ProductUuid,
};

/// Display data for one cart line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItemView {
    /// Product id the line's actions apply to
    pub uuid: ProductUuid,

    /// Product name
    pub name: String,

    /// Chosen quantity
    pub quantity: u32,

    /// Discounted unit price
    pub unit_price: String,

    /// Discounted unit price × quantity
    pub total: String,

    /// Undiscounted line total, only set when the product is discounted.
    pub original_total: Option<String>,

    /// Discount in percentage points
    pub discount_percentage: u8,
}

impl CartItemView {
    /// Build the view for one cart line.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line cannot be priced.
    pub fn from_cart_product(line: &CartProduct<'_>) -> Result<Self, PricingError> {
        let product = line.product();

        let original_total = if product.has_discount() {
            Some(format_currency(&line.subtotal()?))
        } else {
            None
        };

        Ok(Self {
            uuid: line.uuid(),
            name: product.name.clone(),
            quantity: line.quantity(),
            unit_price: format_currency(&product.discounted_price()?),
            total: format_currency(&line.total()?),
            original_total,
            discount_percentage: product.discount_percentage,
        })
    }

    /// Forward a quantity button press to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotInCart`] if the line was already removed.
    pub fn dispatch(&self, cart: &mut Cart<'_>, action: CartItemAction) -> Result<(), CartError> {
        cart.apply(self.uuid, action)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::BRL};
    use testresult::TestResult;

    use crate::{
        currency::format_minor,
        products::{Product, RestaurantRef},
        uuids::RestaurantUuid,
    };

    use super::*;

    fn pizza(discount: u8) -> Product<'static> {
        Product {
            uuid: ProductUuid::new(),
            name: "Pizza".to_string(),
            price: Money::from_minor(40_00, BRL),
            discount_percentage: discount,
            restaurant: RestaurantRef {
                uuid: RestaurantUuid::new(),
                name: "Forno".to_string(),
                delivery_fee: Money::from_minor(0, BRL),
                delivery_time_minutes: 50,
            },
        }
    }

    #[test]
    fn discounted_line_shows_original_total() -> TestResult {
        let mut cart = Cart::new(BRL);
        cart.add_product(pizza(25), 2)?;

        let line = cart.products().first().ok_or("missing line")?;
        let view = CartItemView::from_cart_product(line)?;

        assert_eq!(view.name, "Pizza");
        assert_eq!(view.quantity, 2);
        assert_eq!(view.unit_price, format_minor(30_00));
        assert_eq!(view.total, format_minor(60_00));
        assert_eq!(view.original_total, Some(format_minor(80_00)));

        Ok(())
    }

    #[test]
    fn full_price_line_has_no_original_total() -> TestResult {
        let mut cart = Cart::new(BRL);
        cart.add_product(pizza(0), 1)?;

        let line = cart.products().first().ok_or("missing line")?;
        let view = CartItemView::from_cart_product(line)?;

        assert_eq!(view.original_total, None);
        assert_eq!(view.total, format_minor(40_00));

        Ok(())
    }

    #[test]
    fn dispatch_changes_the_cart() -> TestResult {
        let mut cart = Cart::new(BRL);
        let product = pizza(0);
        let uuid = product.uuid;
        cart.add_product(product, 1)?;

        let line = cart.products().first().ok_or("missing line")?;
        let view = CartItemView::from_cart_product(line)?;

        view.dispatch(&mut cart, CartItemAction::Increase)?;
        assert_eq!(cart.quantity_of(uuid), 2);

        view.dispatch(&mut cart, CartItemAction::Remove)?;
        assert!(cart.is_empty());

        Ok(())
    }
}
