use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::domain::error::Result;
use crate::infrastructure::bootstrap::build_translate_use_case;
use crate::infrastructure::config::Settings;
use crate::interfaces::http::start_server;

pub async fn run() -> Result<()> {
    // Before the subscriber, so RUST_LOG from .env is honored.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(e) => debug!(error = %e, "No environment file loaded"),
    }

    let settings = Settings::load()?;
    let use_case = build_translate_use_case(&settings);

    start_server(use_case, &settings.host, settings.port)?.await?;

    info!("Translation proxy stopped");
    Ok(())
}
