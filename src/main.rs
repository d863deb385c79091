use arguehub_auth::app::build_router;
use arguehub_auth::config::{Config, Environment};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging(environment: Environment) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Si RUST_LOG n'est pas défini, utiliser les règles de l'environnement
        tracing_subscriber::EnvFilter::new(environment.default_log_filter())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    setup_logging(Environment::detect());
    tracing::info!("Starting arguehub-auth...");

    let config = Config::from_env()?;
    let app = build_router(&config);

    if config.lambda {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!(
            "Running in local HTTP server mode ({})",
            config.environment.as_str()
        );
        let addr = config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
