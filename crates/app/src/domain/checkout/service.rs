//! Checkout service.

use std::sync::Arc;

use foodcart::{
    cart::Cart,
    orders::OrderDraft,
    view::{CartView, CheckoutPhaseError},
};
use tracing::{debug, error, info};

use crate::domain::{
    checkout::errors::CheckoutError,
    orders::{OrdersService, data::NewOrder, records::OrderRecord},
    session::SessionProvider,
};

/// Result of finishing an order.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// The order was stored and the cart emptied.
    Submitted(OrderRecord),

    /// Another order is already in flight. Nothing was written.
    AlreadySubmitting,

    /// The confirmation dialog was not open. Nothing was written.
    NotConfirmed,

    /// Nobody is signed in. Nothing was written.
    NotAuthenticated,

    /// There is nothing to order.
    EmptyCart,

    /// The order could not be placed. The cart is left as it was.
    Failed(CheckoutError),
}

impl CheckoutOutcome {
    /// Whether an order was stored.
    pub fn is_submitted(&self) -> bool {
        matches!(self, CheckoutOutcome::Submitted(_))
    }
}

/// Turns a confirmed cart into a stored order.
#[derive(Clone)]
pub struct CheckoutService {
    orders: Arc<dyn OrdersService>,
    session: Arc<dyn SessionProvider>,
}

impl CheckoutService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>, session: Arc<dyn SessionProvider>) -> Self {
        Self { orders, session }
    }

    /// Submit `cart` as an order for the signed-in user.
    ///
    /// The view must be showing the confirmation dialog. While the write is in flight
    /// the view reports loading; afterwards it is back to idle whatever the result.
    /// On success the cart is cleared, on failure it is kept so the user can retry.
    pub async fn finish_order(&self, cart: &mut Cart<'_>, view: &mut CartView) -> CheckoutOutcome {
        if view.is_loading() {
            debug!("order already in flight");
            return CheckoutOutcome::AlreadySubmitting;
        }

        let Some(user) = self.session.current_user().await else {
            debug!("checkout attempted without a signed-in user");
            return CheckoutOutcome::NotAuthenticated;
        };

        if cart.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }

        let order = match OrderDraft::from_cart(cart, user) {
            Ok(draft) => match NewOrder::try_from(&draft) {
                Ok(order) => order,
                Err(error) => return failed(error.into()),
            },
            Err(error) => return failed(error.into()),
        };

        match view.begin_submission() {
            Ok(()) => {}
            Err(CheckoutPhaseError::AlreadySubmitting) => {
                return CheckoutOutcome::AlreadySubmitting;
            }
            Err(CheckoutPhaseError::NotConfirming) => return CheckoutOutcome::NotConfirmed,
            Err(error) => return failed(error.into()),
        }

        let written = self.orders.create_order(order).await;
        let finished = view.finish_submission();

        match (written, finished) {
            (Ok(order), Ok(())) => {
                cart.clear();

                info!(
                    order = %order.uuid,
                    user = %order.user_uuid,
                    total_price = order.total_price,
                    "order placed"
                );

                CheckoutOutcome::Submitted(order)
            }
            (Err(error), _) => failed(error.into()),
            (Ok(_), Err(error)) => failed(error.into()),
        }
    }
}

fn failed(error: CheckoutError) -> CheckoutOutcome {
    error!(error = ?error, "failed to finish order");

    CheckoutOutcome::Failed(error)
}
