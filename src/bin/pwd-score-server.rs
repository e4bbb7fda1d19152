//! Password strength checker HTTP service.

use clap::Parser;
use pwd_score::server::{self, ServerConfig};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();

    // RUST_LOG wins over --verbose
    let default_level = if config.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let scorer = match config.build_scorer() {
        Ok(scorer) => scorer,
        Err(e) => {
            tracing::error!("Failed to load blacklist: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    server::run(config, scorer).await
}
