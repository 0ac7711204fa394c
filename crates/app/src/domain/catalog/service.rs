//! Catalog service.

use async_trait::async_trait;
use foodcart::uuids::{ProductUuid, RestaurantUuid, UserUuid};
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::catalog::{
        errors::CatalogServiceError,
        records::{CategoryRecord, FavoriteRecord, ProductRecord, RestaurantListing},
        repositories::{
            PgCategoriesRepository, PgFavoritesRepository, PgProductsRepository,
            PgRestaurantsRepository,
        },
    },
};

/// Maximum number of restaurants returned by a listing.
pub const RESTAURANT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct PgCatalogService {
    db: Db,
    categories: PgCategoriesRepository,
    restaurants: PgRestaurantsRepository,
    favorites: PgFavoritesRepository,
    products: PgProductsRepository,
}

impl PgCatalogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            categories: PgCategoriesRepository::new(),
            restaurants: PgRestaurantsRepository::new(),
            favorites: PgFavoritesRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl CatalogService for PgCatalogService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.categories.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn list_restaurants(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<RestaurantListing>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let restaurants = self
            .restaurants
            .list_restaurants(&mut tx, user, RESTAURANT_PAGE_SIZE)
            .await?;

        tx.commit().await?;

        Ok(restaurants)
    }

    async fn list_favorites(
        &self,
        user: UserUuid,
    ) -> Result<Vec<FavoriteRecord>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let favorites = self.favorites.list_favorites(&mut tx, user).await?;

        tx.commit().await?;

        Ok(favorites)
    }

    async fn add_favorite(
        &self,
        user: UserUuid,
        restaurant: RestaurantUuid,
    ) -> Result<FavoriteRecord, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let favorite = self
            .favorites
            .create_favorite(&mut tx, user, restaurant)
            .await?;

        tx.commit().await?;

        debug!(%user, %restaurant, "restaurant added to favorites");

        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        user: UserUuid,
        restaurant: RestaurantUuid,
    ) -> Result<(), CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .favorites
            .delete_favorite(&mut tx, user, restaurant)
            .await?;

        if rows_affected == 0 {
            return Err(CatalogServiceError::NotFound);
        }

        tx.commit().await?;

        debug!(%user, %restaurant, "restaurant removed from favorites");

        Ok(())
    }

    async fn get_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, CatalogServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.products.get_products(&mut tx, &products).await?;

        tx.commit().await?;

        if products
            .iter()
            .any(|uuid| !found.iter().any(|product| product.uuid == *uuid))
        {
            return Err(CatalogServiceError::NotFound);
        }

        Ok(found)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CatalogServiceError>;

    /// Retrieves the first page of restaurants, marking the ones `user` has favorited.
    async fn list_restaurants(
        &self,
        user: Option<UserUuid>,
    ) -> Result<Vec<RestaurantListing>, CatalogServiceError>;

    /// Retrieves a user's favorite restaurants, newest first.
    async fn list_favorites(
        &self,
        user: UserUuid,
    ) -> Result<Vec<FavoriteRecord>, CatalogServiceError>;

    /// Marks a restaurant as a favorite of `user`.
    async fn add_favorite(
        &self,
        user: UserUuid,
        restaurant: RestaurantUuid,
    ) -> Result<FavoriteRecord, CatalogServiceError>;

    /// Removes a restaurant from the favorites of `user`.
    async fn remove_favorite(
        &self,
        user: UserUuid,
        restaurant: RestaurantUuid,
    ) -> Result<(), CatalogServiceError>;

    /// Retrieves products with their restaurants, in the order requested.
    ///
    /// Fails with [`CatalogServiceError::NotFound`] when any product is unknown.
    async fn get_products(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, CatalogServiceError>;
}
