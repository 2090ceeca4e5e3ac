use crate::app_config::AppConfig;
use crate::infrastructure::run;
use tracing_subscriber::fmt;

mod app_config;
mod error;
mod handlers;
mod infrastructure;
mod models;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    fmt::Subscriber::builder()
        .with_max_level(config.log_level)
        .init();
    tracing::debug!("using config {:?}", config);

    run(config).await?;
    Ok(())
}
