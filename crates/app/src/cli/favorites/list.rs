use clap::Args;
use uuid::Uuid;

use crate::cli::{config::DatabaseConfig, connect};

#[derive(Debug, Args)]
pub(crate) struct ListFavoritesArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User whose favorites should be listed
    #[arg(long)]
    user: Uuid,
}

pub(crate) async fn run(args: ListFavoritesArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let favorites = ctx
        .catalog
        .list_favorites(args.user.into())
        .await
        .map_err(|error| format!("failed to list favorites: {error}"))?;

    if favorites.is_empty() {
        println!("no favorites found for user {}", args.user);
        return Ok(());
    }

    for favorite in favorites {
        println!("{}  since {}", favorite.restaurant_uuid, favorite.created_at);
    }

    Ok(())
}
