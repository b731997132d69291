use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing database connection, session, and test environment setup.
///
/// Provides an in-memory SQLite database connection and session for isolated
/// unit and integration testing. Both are created lazily on first access and
/// persist for the lifetime of the test context.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same in-memory database, created by `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call the database is initialized if needed, the session table is
    /// migrated, and a new session is created. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError)` - Failed to initialize database connection or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| TestError::Session(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both database and session
    /// - `Err(TestError)` - Failed to initialize database or session
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session(
                "test context was not initialized".to_string(),
            )),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
