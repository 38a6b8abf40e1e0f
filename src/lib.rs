#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

//! Console CRUD tool for a table of student records.
//!
//! The pieces line up with how a session flows: [`config`] decides which
//! SQLite file backs the roster, [`state`] owns the single connection to
//! it, [`data`] turns the five record operations into SQL, and [`ui`]
//! loops on the menu until the user leaves.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod data;
pub mod error;
pub mod state;
pub mod ui;
