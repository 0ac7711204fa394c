use clap::Args;
use foodcart::currency::format_minor;
use uuid::Uuid;

use super::{config::DatabaseConfig, connect};

#[derive(Debug, Args)]
pub(crate) struct OrdersArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// User whose orders should be listed
    #[arg(long)]
    user: Uuid,
}

pub(crate) async fn run(args: OrdersArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let orders = ctx
        .orders
        .list_user_orders(args.user.into())
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found for user {}", args.user);
        return Ok(());
    }

    for order in orders {
        let total = i64::try_from(order.total_price)
            .map_err(|error| format!("invalid total for order {}: {error}", order.uuid))?;

        println!("order_uuid: {}", order.uuid);
        println!("restaurant_uuid: {}", order.restaurant_uuid);
        println!("status: {}", order.status);
        println!("total_price: {}", format_minor(total));
        println!("created_at: {}", order.created_at);

        for item in &order.items {
            println!("  {} x{}", item.product_uuid, item.quantity);
        }

        println!();
    }

    Ok(())
}
