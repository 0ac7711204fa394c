//! Food-ordering Domain Concerns

pub mod amounts;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod session;
