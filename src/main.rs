use config::AppConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("ENV_FILE") {
        Ok(path) => AppConfig::from_env_file(&path)?,
        Err(_) => AppConfig::from_env()?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    info!("🚀 Starting select shop API server");
    info!("📋 Configuration loaded: {}", config);

    api_server::serve(&config).await
}
