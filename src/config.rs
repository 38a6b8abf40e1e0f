use dotenvy::var;

/// Environment variable naming the SQLite file backing the roster.
pub const DB_PATH_VAR: &str = "ROSTER_DB_PATH";

const DEFAULT_DB_PATH: &str = "roster.db";

#[derive(Debug, Clone)]
pub struct Config {
    db_path: String,
}

impl Config {
    /// Reads the configuration from the environment (after `main` has given
    /// `dotenvy` a chance to load a `.env` file), falling back to defaults
    /// so the tool starts without any setup.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            db_path: var(DB_PATH_VAR).unwrap_or_else(|_| DEFAULT_DB_PATH.to_owned()),
        }
    }

    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    #[must_use]
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// sqlx connection URL for the store; `mode=rwc` creates the database
    /// file when it does not exist yet.
    #[must_use]
    pub fn connection_url(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_url_points_at_the_configured_file() {
        let config = Config::new("/tmp/some/roster.db");
        assert_eq!(
            config.connection_url(),
            "sqlite:///tmp/some/roster.db?mode=rwc"
        );
    }
}
