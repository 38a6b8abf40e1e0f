//! Records persisted in the roster store and the statements that move them.

pub mod student;

pub use student::Student;
