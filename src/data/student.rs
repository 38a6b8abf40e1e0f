use crate::error::{
    DecodeStudentRowSnafu, InvalidStudentDataSnafu, MakeQuerySnafu, RosterResult,
};
use snafu::{IntoError, ResultExt, ensure};
use sqlx::{Row, SqliteConnection};

/// A single record of the `students` table.
///
/// The only way to build one is [`Student::new`], which enforces the
/// non-blank-name invariant, so every value of this type is storable as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i32,
    first_name: String,
    last_name: String,
}

impl Student {
    /// Builds a record, rejecting blank names. The id is supplied by the
    /// caller and never changes afterwards.
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> RosterResult<Self> {
        let first_name = first_name.into();
        let last_name = last_name.into();

        ensure!(
            !first_name.trim().is_empty(),
            InvalidStudentDataSnafu {
                id,
                reason: "first name is blank",
            }
        );
        ensure!(
            !last_name.trim().is_empty(),
            InvalidStudentDataSnafu {
                id,
                reason: "last name is blank",
            }
        );

        Ok(Self {
            id,
            first_name,
            last_name,
        })
    }

    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Persists the record. `Ok(false)` means a student with this id already
    /// exists; the stored record is left untouched in that case.
    pub async fn insert(&self, conn: &mut SqliteConnection) -> RosterResult<bool> {
        let inserted =
            sqlx::query("INSERT INTO students (id, first_name, last_name) VALUES (?1, ?2, ?3)")
                .bind(self.id)
                .bind(&self.first_name)
                .bind(&self.last_name)
                .execute(conn)
                .await;

        match inserted {
            Ok(_) => {
                debug!(id = self.id, "student inserted");
                Ok(true)
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                debug!(id = self.id, "insert skipped, id already taken");
                Ok(false)
            }
            Err(source) => Err(MakeQuerySnafu.into_error(source)),
        }
    }

    /// Removes the student with `id`; `Ok(false)` when no such row existed.
    pub async fn delete(id: i32, conn: &mut SqliteConnection) -> RosterResult<bool> {
        let done = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        debug!(id, removed = done.rows_affected(), "delete ran");
        Ok(done.rows_affected() == 1)
    }

    /// Looks up a student by id, `Ok(None)` when absent.
    ///
    /// A row that is present but cannot be mapped back to a valid record
    /// (undecodable columns, blank names written by some other tool) is a
    /// data-integrity error, not a missing student.
    pub async fn fetch(id: i32, conn: &mut SqliteConnection) -> RosterResult<Option<Self>> {
        let Some(row) = sqlx::query("SELECT first_name, last_name FROM students WHERE id = ?1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)?
        else {
            debug!(id, "no such student");
            return Ok(None);
        };

        let first_name: String = row
            .try_get("first_name")
            .context(DecodeStudentRowSnafu { id })?;
        let last_name: String = row
            .try_get("last_name")
            .context(DecodeStudentRowSnafu { id })?;

        Self::new(id, first_name, last_name).map(Some)
    }

    /// Rewrites the first name of the student with `id`; `Ok(false)` when
    /// the id is unknown. Only the targeted column is touched.
    pub async fn update_first_name(
        id: i32,
        first_name: &str,
        conn: &mut SqliteConnection,
    ) -> RosterResult<bool> {
        let done = sqlx::query("UPDATE students SET first_name = ?1 WHERE id = ?2")
            .bind(first_name)
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        debug!(id, changed = done.rows_affected(), "first name update ran");
        Ok(done.rows_affected() == 1)
    }

    /// Rewrites the last name of the student with `id`; `Ok(false)` when
    /// the id is unknown.
    pub async fn update_last_name(
        id: i32,
        last_name: &str,
        conn: &mut SqliteConnection,
    ) -> RosterResult<bool> {
        let done = sqlx::query("UPDATE students SET last_name = ?1 WHERE id = ?2")
            .bind(last_name)
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        debug!(id, changed = done.rows_affected(), "last name update ran");
        Ok(done.rows_affected() == 1)
    }
}
