use tracing::info;
use webapp_shop_bot::lifecycle::{setup_tracing, BotConfig, BotSystem, ConfigError};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    setup_tracing();

    info!("Starting shop bot");

    let config = BotConfig::from_env()?;
    BotSystem::new(config).run().await;

    Ok(())
}
