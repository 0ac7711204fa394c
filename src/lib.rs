//! Foodcart
//!
//! Cart pricing and checkout for a food-ordering storefront: a cart that holds products
//! from a single restaurant, derived totals with per-product discounts and delivery,
//! view models for the cart panel, and order snapshots ready to persist.

pub mod cart;
pub mod currency;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod uuids;
pub mod view;
