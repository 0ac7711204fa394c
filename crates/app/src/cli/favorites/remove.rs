use crate::cli::connect;

use super::FavoriteArgs;

pub(crate) async fn run(args: FavoriteArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    ctx.catalog
        .remove_favorite(args.user.into(), args.restaurant.into())
        .await
        .map_err(|error| format!("failed to remove favorite: {error}"))?;

    println!("removed restaurant {} from favorites", args.restaurant);

    Ok(())
}
