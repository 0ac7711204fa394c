use clap::{Parser, Subcommand};
use foodcart_app::context::{AppContext, AppInitError};

mod categories;
mod checkout;
mod config;
mod db;
mod favorites;
mod logging;
mod orders;
mod restaurants;

use config::{DatabaseConfig, LoggingConfig};

#[derive(Debug, Parser)]
#[command(name = "foodcart-app", about = "Foodcart CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database maintenance
    Db(db::DbCommand),

    /// List food categories
    Categories(categories::CategoriesArgs),

    /// List restaurants
    Restaurants(restaurants::RestaurantsArgs),

    /// Manage favorite restaurants
    Favorites(favorites::FavoritesCommand),

    /// List a user's orders
    Orders(orders::OrdersArgs),

    /// Build a cart and place the order
    Checkout(checkout::CheckoutArgs),
}

impl Cli {
    pub(crate) fn init_logging(&self) -> Result<(), logging::LoggingError> {
        logging::init_subscriber(&self.logging)
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Categories(args) => categories::run(args).await,
            Commands::Restaurants(args) => restaurants::run(args).await,
            Commands::Favorites(command) => favorites::run(command).await,
            Commands::Orders(args) => orders::run(args).await,
            Commands::Checkout(args) => checkout::run(args).await,
        }
    }
}

async fn connect(database: &DatabaseConfig) -> Result<AppContext, String> {
    AppContext::from_database_url(&database.database_url)
        .await
        .map_err(|AppInitError::Database(error)| format!("failed to connect to database: {error}"))
}
