//! Catalog Repositories

mod categories;
mod favorites;
mod products;
mod restaurants;

pub(crate) use categories::PgCategoriesRepository;
pub(crate) use favorites::PgFavoritesRepository;
pub(crate) use products::PgProductsRepository;
pub(crate) use restaurants::PgRestaurantsRepository;
