use std::fs::read_to_string;

use anyhow::Context;
use dev_static_cors::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config: Config = match std::env::args().nth(1) {
    Some(path) => {
      let raw = read_to_string(&path).with_context(|| format!("failed to read config {path}"))?;
      toml::from_str(&raw).with_context(|| format!("failed to parse config {path}"))?
    }
    None => Config::default(),
  };

  let app = dev_static_cors::app_from_env(&config);

  let listener = tokio::net::TcpListener::bind(config.listen)
    .await
    .with_context(|| format!("failed to bind {}", config.listen))?;
  info!(addr = %config.listen, static_dir = %config.static_dir.display(), "listening");
  axum::serve(listener, app).await?;
  Ok(())
}
