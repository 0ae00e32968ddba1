use std::io;

use catapult::CatapultClient;
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let from = required("CATAPULT_FROM")?;
    let to = required("CATAPULT_TO")?;

    let client = CatapultClient::from_env()?;
    let messages = client.messages();

    let sent = messages
        .new_message()
        .from(from)
        .to(to.clone())
        .text("hello from catapult")
        .tag("demo")
        .create()
        .await?;
    println!("sent: {:?} state: {:?}", sent.id, sent.state);

    let recent = messages.query().to(to).size(5).sort_order("desc").list().await?;
    for message in recent {
        println!("{:?} {:?} {:?}", message.id, message.time, message.text);
    }
    Ok(())
}
