//! Products Repository

use foodcart::uuids::ProductUuid;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::{amounts::try_get_unsigned, catalog::records::ProductRecord};

use super::restaurants::restaurant_from_row;

const GET_PRODUCTS_SQL: &str = include_str!("../sql/get_products.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Products in the order their ids were given. Unknown ids are skipped.
    pub(crate) async fn get_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        let uuids: Vec<Uuid> = products.iter().map(|uuid| uuid.into_uuid()).collect();

        query_as::<Postgres, ProductRecord>(GET_PRODUCTS_SQL)
            .bind(uuids)
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            image_url: row.try_get("image_url")?,
            price: try_get_unsigned::<i64, _>(row, "price")?,
            discount_percentage: try_get_unsigned::<i16, _>(row, "discount_percentage")?,
            restaurant: restaurant_from_row(row, "restaurant_")?,
        })
    }
}
