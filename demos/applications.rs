use std::io;

use catapult::CatapultClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let callback_url = std::env::var("CATAPULT_CALLBACK_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CATAPULT_CALLBACK_URL environment variable is required",
        )
    })?;

    let client = CatapultClient::from_env()?;
    let applications = client.applications();

    let mut app = applications
        .new_application()
        .name("catapult-demo")
        .incoming_call_url(callback_url.clone())
        .incoming_sms_url(callback_url)
        .auto_answer(true)
        .create()
        .await?;
    println!("created: {:?}", app.id);

    for existing in applications.query().size(20).list().await? {
        println!("{:?} {:?}", existing.id, existing.name);
    }

    app.delete().await?;
    println!("deleted, id is now {:?}", app.id);
    Ok(())
}
