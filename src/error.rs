use snafu::Snafu;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening the database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error preparing the students table"))]
    EnsureSchema { source: sqlx::Error },
    #[snafu(display("Error executing a SQL statement"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error closing the database"))]
    CloseDatabase { source: sqlx::Error },
    #[snafu(display("Stored data for student {id} could not be decoded"))]
    DecodeStudentRow { id: i32, source: sqlx::Error },
    #[snafu(display("Student {id} has invalid data: {reason}"))]
    InvalidStudentData { id: i32, reason: &'static str },
    #[snafu(display("Error reading console input"))]
    ConsoleIo { source: std::io::Error },
    #[snafu(display("Console input closed"))]
    InputClosed,
}

impl RosterError {
    /// Whether the menu loop has to stop after reporting this error.
    ///
    /// Storage and data-integrity failures are reported and the menu keeps
    /// going; once the console itself is gone there is nobody left to prompt.
    #[must_use]
    pub const fn ends_session(&self) -> bool {
        matches!(self, Self::ConsoleIo { .. } | Self::InputClosed)
    }
}
