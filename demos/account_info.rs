use catapult::CatapultClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CatapultClient::from_env()?;
    let account = client.account();

    let info = account.info().await?;
    println!(
        "balance: {:?}, account_type: {:?}",
        info.balance, info.account_type
    );

    let transactions = account.transactions().max_items(10).list().await?;
    for transaction in transactions {
        println!(
            "{} {:?} {:?} {:?}",
            transaction.id, transaction.time, transaction.transaction_type, transaction.amount
        );
    }
    Ok(())
}
