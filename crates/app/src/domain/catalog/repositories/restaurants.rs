//! Restaurants Repository

use foodcart::uuids::{RestaurantUuid, UserUuid};
use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    amounts::{bind_signed, try_get_unsigned},
    catalog::records::{RestaurantListing, RestaurantRecord},
};

const LIST_RESTAURANTS_SQL: &str = include_str!("../sql/list_restaurants.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRestaurantsRepository;

impl PgRestaurantsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_restaurants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: Option<UserUuid>,
        limit: u32,
    ) -> Result<Vec<RestaurantListing>, sqlx::Error> {
        query_as::<Postgres, RestaurantListing>(LIST_RESTAURANTS_SQL)
            .bind(user.map(UserUuid::into_uuid))
            .bind(bind_signed::<u32, i64>(limit, "limit")?)
            .fetch_all(&mut **tx)
            .await
    }
}

/// Decode a restaurant whose columns share `prefix`.
pub(super) fn restaurant_from_row(row: &PgRow, prefix: &str) -> sqlx::Result<RestaurantRecord> {
    let column = |name: &str| format!("{prefix}{name}");

    Ok(RestaurantRecord {
        uuid: RestaurantUuid::from_uuid(row.try_get(column("uuid").as_str())?),
        name: row.try_get(column("name").as_str())?,
        image_url: row.try_get(column("image_url").as_str())?,
        delivery_fee: try_get_unsigned::<i64, _>(row, &column("delivery_fee"))?,
        delivery_time_minutes: try_get_unsigned::<i32, _>(row, &column("delivery_time_minutes"))?,
        created_at: row
            .try_get::<SqlxTimestamp, _>(column("created_at").as_str())?
            .to_jiff(),
    })
}

impl<'r> FromRow<'r, PgRow> for RestaurantListing {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            restaurant: restaurant_from_row(row, "")?,
            is_favorite: row.try_get("is_favorite")?,
        })
    }
}
