//! Foodcart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartItemAction, CartProduct},
    currency::{STORE_CURRENCY, format_currency, format_discount},
    orders::{LineItem, OrderDraft, OrderDraftError, OrderStatus},
    pricing::PricingError,
    products::{Product, RestaurantRef},
    uuids::{ProductUuid, RestaurantUuid, TypedUuid, UserUuid},
    view::{
        CartItemView, CartSummary, CartTotals, CartView, CheckoutPhase, CheckoutPhaseError,
        RenderError, ShippingLabel,
    },
};
