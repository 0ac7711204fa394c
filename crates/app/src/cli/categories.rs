use clap::Args;

use super::{config::DatabaseConfig, connect};

#[derive(Debug, Args)]
pub(crate) struct CategoriesArgs {
    #[command(flatten)]
    database: DatabaseConfig,
}

pub(crate) async fn run(args: CategoriesArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let categories = ctx
        .catalog
        .list_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    if categories.is_empty() {
        println!("no categories found");
        return Ok(());
    }

    for category in categories {
        println!("{}  {}", category.uuid, category.name);
    }

    Ok(())
}
