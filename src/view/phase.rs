//! Checkout phases

use serde::Serialize;
use thiserror::Error;

/// Where the cart view is in the confirm-then-submit flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutPhase {
    /// Browsing the cart.
    #[default]
    Idle,

    /// The confirmation dialog is open.
    ConfirmPending,

    /// An order write is in flight.
    Submitting,
}

/// Transitions the checkout flow does not allow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutPhaseError {
    /// An order is already being submitted.
    #[error("an order is already being submitted")]
    AlreadySubmitting,

    /// Submission was requested without opening the confirmation first.
    #[error("checkout has not been confirmed")]
    NotConfirming,

    /// A submission was finished that never started.
    #[error("no order is being submitted")]
    NotSubmitting,
}

impl CheckoutPhase {
    pub(super) fn open_confirmation(self) -> Result<Self, CheckoutPhaseError> {
        match self {
            CheckoutPhase::Idle | CheckoutPhase::ConfirmPending => {
                Ok(CheckoutPhase::ConfirmPending)
            }
            CheckoutPhase::Submitting => Err(CheckoutPhaseError::AlreadySubmitting),
        }
    }

    pub(super) fn cancel(self) -> Result<Self, CheckoutPhaseError> {
        match self {
            CheckoutPhase::Idle | CheckoutPhase::ConfirmPending => Ok(CheckoutPhase::Idle),
            CheckoutPhase::Submitting => Err(CheckoutPhaseError::AlreadySubmitting),
        }
    }

    pub(super) fn begin_submission(self) -> Result<Self, CheckoutPhaseError> {
        match self {
            CheckoutPhase::ConfirmPending => Ok(CheckoutPhase::Submitting),
            CheckoutPhase::Submitting => Err(CheckoutPhaseError::AlreadySubmitting),
            CheckoutPhase::Idle => Err(CheckoutPhaseError::NotConfirming),
        }
    }

    pub(super) fn finish_submission(self) -> Result<Self, CheckoutPhaseError> {
        match self {
            CheckoutPhase::Submitting => Ok(CheckoutPhase::Idle),
            CheckoutPhase::Idle | CheckoutPhase::ConfirmPending => {
                Err(CheckoutPhaseError::NotSubmitting)
            }
        }
    }
}
