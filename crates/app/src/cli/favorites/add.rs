use crate::cli::connect;

use super::FavoriteArgs;

pub(crate) async fn run(args: FavoriteArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let favorite = ctx
        .catalog
        .add_favorite(args.user.into(), args.restaurant.into())
        .await
        .map_err(|error| format!("failed to add favorite: {error}"))?;

    println!("restaurant_uuid: {}", favorite.restaurant_uuid);
    println!("created_at: {}", favorite.created_at);

    Ok(())
}
