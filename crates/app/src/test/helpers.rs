//! Test Helpers
//!
//! Seed rows the services only read.

use foodcart::uuids::{ProductUuid, RestaurantUuid, UserUuid};
use sqlx::query;

use crate::{domain::catalog::records::CategoryUuid, test::TestContext};

pub(crate) async fn create_user(ctx: &TestContext, email: &str) -> Result<UserUuid, sqlx::Error> {
    let uuid = UserUuid::new();

    query("INSERT INTO users (uuid, name, email) VALUES ($1, $2, $3)")
        .bind(uuid.into_uuid())
        .bind(email.split('@').next().unwrap_or(email))
        .bind(email)
        .execute(ctx.db.pool())
        .await?;

    Ok(uuid)
}

pub(crate) async fn create_category(
    ctx: &TestContext,
    name: &str,
) -> Result<CategoryUuid, sqlx::Error> {
    let uuid = CategoryUuid::new();

    query("INSERT INTO categories (uuid, name, image_url) VALUES ($1, $2, $3)")
        .bind(uuid.into_uuid())
        .bind(name)
        .bind(format!("https://img.example.com/categories/{uuid}.png"))
        .execute(ctx.db.pool())
        .await?;

    Ok(uuid)
}

pub(crate) async fn create_restaurant(
    ctx: &TestContext,
    name: &str,
    delivery_fee: i64,
) -> Result<RestaurantUuid, sqlx::Error> {
    let uuid = RestaurantUuid::new();

    query(
        "INSERT INTO restaurants (uuid, name, image_url, delivery_fee, delivery_time_minutes) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(uuid.into_uuid())
    .bind(name)
    .bind(format!("https://img.example.com/restaurants/{uuid}.png"))
    .bind(delivery_fee)
    .bind(30_i32)
    .execute(ctx.db.pool())
    .await?;

    Ok(uuid)
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    restaurant: RestaurantUuid,
    category: CategoryUuid,
    name: &str,
    price: i64,
    discount_percentage: i16,
) -> Result<ProductUuid, sqlx::Error> {
    let uuid = ProductUuid::new();

    query(
        "INSERT INTO products \
         (uuid, name, image_url, price, discount_percentage, restaurant_uuid, category_uuid) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(uuid.into_uuid())
    .bind(name)
    .bind(format!("https://img.example.com/products/{uuid}.png"))
    .bind(price)
    .bind(discount_percentage)
    .bind(restaurant.into_uuid())
    .bind(category.into_uuid())
    .execute(ctx.db.pool())
    .await?;

    Ok(uuid)
}
