//! Checkout errors.

use std::num::TryFromIntError;

use foodcart::{orders::OrderDraftError, view::CheckoutPhaseError};
use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

/// Why a confirmed checkout did not produce an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("failed to snapshot cart")]
    Draft(#[from] OrderDraftError),

    #[error("order amount cannot be stored")]
    InvalidAmount(#[from] TryFromIntError),

    #[error("failed to create order")]
    Orders(#[from] OrdersServiceError),

    #[error("checkout flow out of step")]
    Phase(#[from] CheckoutPhaseError),
}
