use crate::{
    config::Config,
    error::{CloseDatabaseSnafu, EnsureSchemaSnafu, OpenDatabaseSnafu, RosterResult},
};
use snafu::ResultExt;
use sqlx::{Connection, SqliteConnection};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS students (
    id         INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL
)";

/// Owns the one database connection for the lifetime of the process.
///
/// Everything the tool does goes through this handle, one statement at a
/// time; there is no pool and nothing to share it with.
#[derive(Debug)]
pub struct RosterState {
    conn: SqliteConnection,
}

impl RosterState {
    /// Opens the store named by `config`, creating the database file and
    /// the `students` table when they do not exist yet.
    pub async fn new(config: &Config) -> RosterResult<Self> {
        let mut conn = SqliteConnection::connect(&config.connection_url())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::query(SCHEMA)
            .execute(&mut conn)
            .await
            .context(EnsureSchemaSnafu)?;

        info!(db_path = config.db_path(), "store ready");
        Ok(Self { conn })
    }

    /// Exclusive handle for the data-access layer.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Closes the connection explicitly instead of letting it drop.
    pub async fn sensible_shutdown(self) -> RosterResult<()> {
        info!("closing store");
        self.conn.close().await.context(CloseDatabaseSnafu)
    }
}
