use std::io;

use catapult::CatapultClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let state = std::env::var("CATAPULT_STATE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CATAPULT_STATE environment variable is required",
        )
    })?;

    let client = CatapultClient::from_env()?;
    let numbers = client
        .available_numbers()
        .search_local()
        .state(state)
        .quantity(5)
        .list()
        .await?;

    for number in numbers {
        println!(
            "{} ({:?}, {:?}) price: {:?}",
            number.number, number.city, number.rate_center, number.price
        );
    }
    Ok(())
}
