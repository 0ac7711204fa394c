//! Cart view
//!
//! View state for the cart panel: what to display for the current cart, and the
//! confirm-then-submit flow guarding checkout.

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::{
    cart::Cart,
    currency::{format_currency, format_discount},
    pricing::PricingError,
};

mod item;
mod phase;
mod render;

pub use item::CartItemView;
pub use phase::{CheckoutPhase, CheckoutPhaseError};
pub use render::RenderError;

/// What the delivery line of the cart shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum ShippingLabel {
    /// The restaurant delivers for free.
    Free,

    /// Formatted delivery fee.
    Fee(String),
}

impl ShippingLabel {
    /// Label for a delivery fee. Only a fee of exactly zero is free.
    pub fn for_fee(fee: &Money<'_, Currency>) -> Self {
        if fee.to_minor_units() == 0 {
            ShippingLabel::Free
        } else {
            ShippingLabel::Fee(format_currency(fee))
        }
    }
}

impl fmt::Display for ShippingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShippingLabel::Free => f.write_str("Free"),
            ShippingLabel::Fee(fee) => f.write_str(fee),
        }
    }
}

/// Formatted cart totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartTotals {
    /// Subtotal before discounts
    pub subtotal: String,

    /// Discounts, formatted as a deduction
    pub discounts: String,

    /// Delivery line
    pub shipping: ShippingLabel,

    /// Amount to pay
    pub total: String,
}

/// Everything the cart panel displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CartSummary {
    /// The cart has no products.
    Empty,

    /// The cart has products.
    Filled {
        /// One view per cart line, in cart order
        items: Vec<CartItemView>,

        /// Formatted totals
        totals: CartTotals,

        /// Whether the finish-order control shows a spinner and is disabled
        loading: bool,
    },
}

impl CartSummary {
    /// Whether the empty state is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, CartSummary::Empty)
    }
}

/// Cart panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartView {
    phase: CheckoutPhase,
}

impl CartView {
    /// A view in the idle phase.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current checkout phase.
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Whether an order write is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == CheckoutPhase::Submitting
    }

    /// Whether the confirmation dialog is showing.
    pub fn is_confirmation_open(&self) -> bool {
        self.phase == CheckoutPhase::ConfirmPending
    }

    /// Open the confirmation dialog.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutPhaseError::AlreadySubmitting`] while an order is in flight.
    pub fn open_confirmation(&mut self) -> Result<(), CheckoutPhaseError> {
        self.phase = self.phase.open_confirmation()?;

        Ok(())
    }

    /// Close the confirmation dialog without ordering.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutPhaseError::AlreadySubmitting`] while an order is in flight.
    pub fn cancel(&mut self) -> Result<(), CheckoutPhaseError> {
        self.phase = self.phase.cancel()?;

        Ok(())
    }

    /// Mark an order write as in flight. This is the double-submit guard: it must be
    /// called, and succeed, before the write is issued.
    ///
    /// # Errors
    ///
    /// - [`CheckoutPhaseError::AlreadySubmitting`]: another write is in flight.
    /// - [`CheckoutPhaseError::NotConfirming`]: the confirmation dialog is not open.
    pub fn begin_submission(&mut self) -> Result<(), CheckoutPhaseError> {
        self.phase = self.phase.begin_submission()?;

        Ok(())
    }

    /// Mark the in-flight write as finished, successful or not.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutPhaseError::NotSubmitting`] if no write was in flight.
    pub fn finish_submission(&mut self) -> Result<(), CheckoutPhaseError> {
        self.phase = self.phase.finish_submission()?;

        Ok(())
    }

    /// Build the display data for `cart`.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the cart cannot be priced.
    pub fn render(&self, cart: &Cart<'_>) -> Result<CartSummary, PricingError> {
        if cart.is_empty() {
            return Ok(CartSummary::Empty);
        }

        let items = cart
            .iter()
            .map(CartItemView::from_cart_product)
            .collect::<Result<Vec<_>, _>>()?;

        let totals = CartTotals {
            subtotal: format_currency(&cart.subtotal_price()?),
            discounts: format_discount(&cart.total_discounts()?),
            shipping: ShippingLabel::for_fee(&cart.delivery_fee()),
            total: format_currency(&cart.total_price()?),
        };

        Ok(CartSummary::Filled {
            items,
            totals,
            loading: self.is_loading(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::BRL;
    use testresult::TestResult;

    use crate::{
        currency::format_minor,
        products::{Product, RestaurantRef},
        uuids::{ProductUuid, RestaurantUuid},
    };

    use super::*;

    fn product(price: i64, discount: u8, fee: i64) -> Product<'static> {
        Product {
            uuid: ProductUuid::new(),
            name: "Açaí".to_string(),
            price: Money::from_minor(price, BRL),
            discount_percentage: discount,
            restaurant: RestaurantRef {
                uuid: RestaurantUuid::new(),
                name: "Açaiteria".to_string(),
                delivery_fee: Money::from_minor(fee, BRL),
                delivery_time_minutes: 20,
            },
        }
    }

    #[test]
    fn empty_cart_renders_empty_state() -> TestResult {
        let summary = CartView::new().render(&Cart::new(BRL))?;

        assert!(summary.is_empty());

        Ok(())
    }

    #[test]
    fn free_delivery_label() -> TestResult {
        let mut cart = Cart::new(BRL);
        cart.add_product(product(10_00, 10, 0), 1)?;

        let summary = CartView::new().render(&cart)?;

        let CartSummary::Filled { items, totals, loading } = summary else {
            return Err("expected filled summary".into());
        };

        assert_eq!(items.len(), 1);
        assert_eq!(totals.subtotal, format_minor(10_00));
        assert_eq!(totals.discounts, format!("-{}", format_minor(1_00)));
        assert_eq!(totals.shipping, ShippingLabel::Free);
        assert_eq!(totals.total, format_minor(9_00));
        assert!(!loading);

        Ok(())
    }

    #[test]
    fn paid_delivery_label_shows_fee() -> TestResult {
        let mut cart = Cart::new(BRL);
        cart.add_product(product(20_00, 0, 5_00), 2)?;

        let summary = CartView::new().render(&cart)?;

        let CartSummary::Filled { totals, .. } = summary else {
            return Err("expected filled summary".into());
        };

        assert_eq!(totals.shipping, ShippingLabel::Fee(format_minor(5_00)));
        assert_eq!(totals.total, format_minor(45_00));

        Ok(())
    }

    #[test]
    fn one_cent_fee_is_not_free() {
        let fee = Money::from_minor(1, BRL);

        assert_ne!(ShippingLabel::for_fee(&fee), ShippingLabel::Free);
    }

    #[test]
    fn loading_follows_submission() -> TestResult {
        let mut cart = Cart::new(BRL);
        cart.add_product(product(20_00, 0, 5_00), 1)?;

        let mut view = CartView::new();
        view.open_confirmation()?;
        assert!(view.is_confirmation_open());

        view.begin_submission()?;
        assert!(view.is_loading());

        let CartSummary::Filled { loading, .. } = view.render(&cart)? else {
            return Err("expected filled summary".into());
        };
        assert!(loading);

        view.finish_submission()?;
        assert_eq!(view.phase(), CheckoutPhase::Idle);
        assert!(!view.is_loading());

        Ok(())
    }

    #[test]
    fn cancel_closes_confirmation() -> TestResult {
        let mut view = CartView::new();

        view.open_confirmation()?;
        view.cancel()?;

        assert_eq!(view.phase(), CheckoutPhase::Idle);

        Ok(())
    }
}
