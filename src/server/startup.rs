use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, Address, AsyncSmtpTransport,
    Tokio1Executor,
};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{ExpiredDeletion, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{mail::MailError, AppError},
    service::mail::Mailer,
};

/// Interval between sweeps of expired sessions.
const SESSION_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr(_))` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days of inactivity; a background task deletes
/// expired rows.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to be applied to the router
/// - `Err(AppError::SqlxErr(_))` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let deletion_store = session_store.clone();
    tokio::spawn(async move {
        if let Err(e) = deletion_store
            .continuously_delete_expired(tokio::time::Duration::from_secs(
                SESSION_CLEANUP_INTERVAL_SECS,
            ))
            .await
        {
            tracing::error!("Expired session cleanup stopped: {}", e);
        }
    });

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the outgoing mailer.
///
/// Uses the SMTP relay when one is configured; otherwise emails are only logged.
///
/// # Returns
/// - `Ok(Mailer)` - Mail transport
/// - `Err(AppError::MailErr(_))` - Invalid relay host or sender address
pub fn setup_mailer(config: &Config) -> Result<Mailer, AppError> {
    let Some(smtp) = &config.smtp else {
        tracing::warn!("SMTP_HOST is not set, outgoing emails will only be logged");
        return Ok(Mailer::Log);
    };

    let address: Address = smtp.username.parse().map_err(MailError::from)?;
    let from = Mailbox::new(Some(smtp.from_name.clone()), address);

    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
        .map_err(MailError::from)?
        .port(smtp.port)
        .credentials(Credentials::new(
            smtp.username.clone(),
            smtp.password.clone(),
        ))
        .build();

    tracing::info!("Sending email through {}:{}", smtp.host, smtp.port);

    Ok(Mailer::Smtp { transport, from })
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
