use clap::{Args, Subcommand};
use uuid::Uuid;

use super::config::DatabaseConfig;

mod add;
mod list;
mod remove;

#[derive(Debug, Args)]
pub(crate) struct FavoritesCommand {
    #[command(subcommand)]
    command: FavoritesSubcommand,
}

#[derive(Debug, Subcommand)]
enum FavoritesSubcommand {
    /// List a user's favorite restaurants
    List(list::ListFavoritesArgs),

    /// Mark a restaurant as favorite
    Add(FavoriteArgs),

    /// Unmark a favorite restaurant
    Remove(FavoriteArgs),
}

#[derive(Debug, Args)]
pub(crate) struct FavoriteArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User UUID
    #[arg(long)]
    user: Uuid,

    /// Restaurant UUID
    #[arg(long)]
    restaurant: Uuid,
}

pub(crate) async fn run(command: FavoritesCommand) -> Result<(), String> {
    match command.command {
        FavoritesSubcommand::List(args) => list::run(args).await,
        FavoritesSubcommand::Add(args) => add::run(args).await,
        FavoritesSubcommand::Remove(args) => remove::run(args).await,
    }
}
