//! Catalog Records

use std::num::TryFromIntError;

use foodcart::{
    products::{Product, RestaurantRef},
    uuids::{ProductUuid, RestaurantUuid, TypedUuid, UserUuid},
};
use jiff::Timestamp;
use serde::Serialize;

use crate::domain::amounts::to_money;

/// Category UUID
pub type CategoryUuid = TypedUuid<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRecord {
    pub uuid: CategoryUuid,
    pub name: String,
    pub image_url: String,
    pub created_at: Timestamp,
}

/// Restaurant Record
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantRecord {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub image_url: String,
    pub delivery_fee: u64,
    pub delivery_time_minutes: u32,
    pub created_at: Timestamp,
}

impl RestaurantRecord {
    /// The restaurant as attached to priced products.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored delivery fee does not fit a money amount.
    pub fn to_restaurant_ref(&self) -> Result<RestaurantRef<'static>, TryFromIntError> {
        Ok(RestaurantRef {
            uuid: self.uuid,
            name: self.name.clone(),
            delivery_fee: to_money(self.delivery_fee)?,
            delivery_time_minutes: self.delivery_time_minutes,
        })
    }
}

/// A restaurant in a listing, marked when the listing user has favorited it.
#[derive(Debug, Clone, Serialize)]
pub struct RestaurantListing {
    #[serde(flatten)]
    pub restaurant: RestaurantRecord,
    pub is_favorite: bool,
}

/// Favorite Restaurant Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteRecord {
    pub user_uuid: UserUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub created_at: Timestamp,
}

/// Product Record, loaded together with its restaurant.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
    pub discount_percentage: u8,
    pub restaurant: RestaurantRecord,
}

impl ProductRecord {
    /// The product as the cart prices it.
    ///
    /// # Errors
    ///
    /// Returns an error when a stored amount does not fit a money amount.
    pub fn to_product(&self) -> Result<Product<'static>, TryFromIntError> {
        Ok(Product {
            uuid: self.uuid,
            name: self.name.clone(),
            price: to_money(self.price)?,
            discount_percentage: self.discount_percentage,
            restaurant: self.restaurant.to_restaurant_ref()?,
        })
    }
}
