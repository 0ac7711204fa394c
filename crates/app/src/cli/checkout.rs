use std::{io, sync::Arc};

use clap::Args;
use foodcart::{
    cart::Cart,
    currency::STORE_CURRENCY,
    uuids::ProductUuid,
    view::{CartSummary, CartView},
};
use foodcart_app::domain::{
    checkout::CheckoutOutcome,
    session::{SessionProvider, StaticSession},
};
use serde::Serialize;
use uuid::Uuid;

use super::{config::DatabaseConfig, connect};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Ordering user; checkout is refused when omitted
    #[arg(long)]
    user: Option<Uuid>,

    /// Product and quantity, as `<product-uuid>=<quantity>`; repeatable
    #[arg(long = "item", value_parser = parse_item, required = true)]
    items: Vec<(Uuid, u32)>,

    /// Print the cart without placing the order
    #[arg(long)]
    dry_run: bool,

    /// Print the cart summary as JSON
    #[arg(long)]
    json: bool,
}

fn parse_item(value: &str) -> Result<(Uuid, u32), String> {
    let (product, quantity) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <product-uuid>=<quantity>, got {value:?}"))?;

    let product = Uuid::parse_str(product.trim())
        .map_err(|error| format!("invalid product uuid {product:?}: {error}"))?;

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid quantity {quantity:?}: {error}"))?;

    Ok((product, quantity))
}

#[derive(Serialize)]
struct CheckoutReport<'a> {
    cart: &'a CartSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_uuid: Option<String>,
}

pub(crate) async fn run(args: CheckoutArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let uuids: Vec<ProductUuid> = args
        .items
        .iter()
        .map(|(uuid, _)| ProductUuid::from_uuid(*uuid))
        .collect();

    let records = ctx
        .catalog
        .get_products(uuids)
        .await
        .map_err(|error| format!("failed to load products: {error}"))?;

    let mut cart = Cart::new(STORE_CURRENCY);

    for (uuid, quantity) in &args.items {
        let record = records
            .iter()
            .find(|record| record.uuid.into_uuid() == *uuid)
            .ok_or_else(|| format!("product {uuid} not found"))?;

        let product = record
            .to_product()
            .map_err(|error| format!("invalid price for product {uuid}: {error}"))?;

        cart.add_product(product, *quantity)
            .map_err(|error| format!("cannot add product {uuid}: {error}"))?;
    }

    let mut view = CartView::new();

    let summary = view
        .render(&cart)
        .map_err(|error| format!("failed to price cart: {error}"))?;

    if args.dry_run {
        return print_summary(&summary, None, args.json);
    }

    let session: Arc<dyn SessionProvider> = match args.user {
        Some(user) => Arc::new(StaticSession::signed_in(user.into())),
        None => Arc::new(StaticSession::anonymous()),
    };

    view.open_confirmation()
        .map_err(|error| format!("cannot confirm checkout: {error}"))?;

    match ctx.checkout(session).finish_order(&mut cart, &mut view).await {
        CheckoutOutcome::Submitted(order) => {
            print_summary(&summary, Some(order.uuid.to_string()), args.json)
        }
        CheckoutOutcome::NotAuthenticated => Err("sign in with --user to place an order".into()),
        CheckoutOutcome::EmptyCart => Err("cart is empty".into()),
        CheckoutOutcome::AlreadySubmitting => Err("an order is already being placed".into()),
        CheckoutOutcome::NotConfirmed => Err("checkout was not confirmed".into()),
        CheckoutOutcome::Failed(error) => Err(format!("failed to place order: {error}")),
    }
}

fn print_summary(summary: &CartSummary, order_uuid: Option<String>, json: bool) -> Result<(), String> {
    if json {
        let report = CheckoutReport {
            cart: summary,
            order_uuid,
        };

        let output = serde_json::to_string_pretty(&report)
            .map_err(|error| format!("failed to encode summary: {error}"))?;

        println!("{output}");

        return Ok(());
    }

    summary
        .write_to(io::stdout().lock())
        .map_err(|error| format!("failed to print summary: {error}"))?;

    if let Some(order_uuid) = order_uuid {
        println!();
        println!("order_uuid: {order_uuid}");
    }

    Ok(())
}
