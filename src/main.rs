// --- Generador de Horarios a partir de auditorías de grado ---

use degreeshift::{run_server, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={},actix_web=info", env!("CARGO_PKG_NAME"), config.log_level))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("=== Generador de Horarios (API) ===");
    run_server(config).await
}
