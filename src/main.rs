mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let mailer = startup::setup_mailer(&config)?;
    let cors = router::cors_layer(config.origin.as_deref())?;

    let app = router::router()
        .with_state(AppState::new(
            db.clone(),
            mailer,
            config.app_url.clone(),
            config.frontend_url.clone(),
        ))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database connection closed");

    Ok(())
}
