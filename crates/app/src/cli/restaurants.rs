use clap::Args;
use foodcart::view::ShippingLabel;
use foodcart_app::domain::catalog::records::RestaurantListing;
use uuid::Uuid;

use super::{config::DatabaseConfig, connect};

#[derive(Debug, Args)]
pub(crate) struct RestaurantsArgs {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Mark the favorites of this user
    #[arg(long)]
    user: Option<Uuid>,
}

pub(crate) async fn run(args: RestaurantsArgs) -> Result<(), String> {
    let ctx = connect(&args.database).await?;

    let restaurants = ctx
        .catalog
        .list_restaurants(args.user.map(Into::into))
        .await
        .map_err(|error| format!("failed to list restaurants: {error}"))?;

    if restaurants.is_empty() {
        println!("no restaurants found");
        return Ok(());
    }

    for listing in &restaurants {
        println!("{}", describe(listing)?);
    }

    Ok(())
}

fn describe(listing: &RestaurantListing) -> Result<String, String> {
    let restaurant = &listing.restaurant;

    let priced = restaurant
        .to_restaurant_ref()
        .map_err(|error| format!("invalid delivery fee for {}: {error}", restaurant.uuid))?;

    let delivery = ShippingLabel::for_fee(&priced.delivery_fee);

    let marker = if listing.is_favorite { "★" } else { " " };

    Ok(format!(
        "{marker} {}  {}  delivery {delivery}, {} min",
        restaurant.uuid, restaurant.name, restaurant.delivery_time_minutes
    ))
}

#[cfg(test)]
mod tests {
    use foodcart::{currency::format_minor, uuids::RestaurantUuid};
    use foodcart_app::domain::catalog::records::RestaurantRecord;
    use jiff::Timestamp;

    use super::*;

    fn listing(delivery_fee: u64, is_favorite: bool) -> RestaurantListing {
        RestaurantListing {
            restaurant: RestaurantRecord {
                uuid: RestaurantUuid::new(),
                name: "Sushi Bar".to_string(),
                image_url: String::new(),
                delivery_fee,
                delivery_time_minutes: 35,
                created_at: Timestamp::now(),
            },
            is_favorite,
        }
    }

    #[test]
    fn zero_fee_is_shown_as_free() -> Result<(), String> {
        let line = describe(&listing(0, true))?;

        assert!(line.starts_with('★'));
        assert!(line.contains("delivery Free, 35 min"));

        Ok(())
    }

    #[test]
    fn paid_delivery_shows_formatted_fee() -> Result<(), String> {
        let line = describe(&listing(7_50, false))?;

        assert!(line.contains(&format!("delivery {}", format_minor(7_50))));
        assert!(!line.contains("Free"));

        Ok(())
    }
}
