//! The interactive menu: prompts on stdout, records in, results out.
//!
//! Every reader takes `&mut impl BufRead` so the whole loop can be driven
//! from scripted input in tests; `main` hands it a locked stdin.

use crate::{
    data::Student,
    error::{ConsoleIoSnafu, InputClosedSnafu, RosterResult},
    state::RosterState,
};
use snafu::{OptionExt, Report, ResultExt};
use std::io::{self, BufRead, Write};

const MENU: &str = "
==== Student Roster ====
  1. Insert a student
  2. Delete a student
  3. Fetch a student
  4. Update a first name
  5. Update a last name
  6. Exit
";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Delete,
    Fetch,
    UpdateFirstName,
    UpdateLastName,
    Exit,
}

impl MenuChoice {
    /// Parses a menu line; accepts exactly the integers 1 through 6.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u8>() {
            Ok(1) => Some(Self::Insert),
            Ok(2) => Some(Self::Delete),
            Ok(3) => Some(Self::Fetch),
            Ok(4) => Some(Self::UpdateFirstName),
            Ok(5) => Some(Self::UpdateLastName),
            Ok(6) => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drives the menu until the user picks exit or the input ends.
///
/// Action failures are reported here, at the dispatch boundary, and the
/// loop carries on; only a dead console ends the session early.
pub async fn run_menu(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    loop {
        println!("{MENU}");
        let choice = read_menu_choice(input)?;
        debug!(?choice, "dispatching");

        let outcome = match choice {
            MenuChoice::Insert => insert_student(state, input).await,
            MenuChoice::Delete => delete_student(state, input).await,
            MenuChoice::Fetch => fetch_student(state, input).await,
            MenuChoice::UpdateFirstName => update_first_name(state, input).await,
            MenuChoice::UpdateLastName => update_last_name(state, input).await,
            MenuChoice::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        };

        if let Err(e) = outcome {
            if e.ends_session() {
                return Err(e);
            }
            error!(?e, "action failed");
            eprintln!("{}", Report::from_error(e));
        }
    }
}

/// Reads a choice, re-prompting on anything outside 1-6. End of input
/// counts as choosing to exit, so piped sessions always finish cleanly.
fn read_menu_choice(input: &mut impl BufRead) -> RosterResult<MenuChoice> {
    loop {
        print!("Enter your choice (1-6): ");
        io::stdout().flush().context(ConsoleIoSnafu)?;

        let Some(line) = read_line(input)? else {
            return Ok(MenuChoice::Exit);
        };
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(choice),
            None => println!("Please enter a number between 1 and 6."),
        }
    }
}

async fn insert_student(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    let id = prompt_for_id(input)?;
    let first_name = prompt_for_name("first", input)?;
    let last_name = prompt_for_name("last", input)?;

    let student = Student::new(id, first_name, last_name)?;
    if student.insert(state.conn()).await? {
        println!("Student {id} inserted.");
    } else {
        println!("A student with id {id} already exists.");
    }
    Ok(())
}

async fn delete_student(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    let id = prompt_for_id(input)?;

    if Student::delete(id, state.conn()).await? {
        println!("Student {id} deleted.");
    } else {
        println!("No student with id {id} exists.");
    }
    Ok(())
}

async fn fetch_student(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    let id = prompt_for_id(input)?;

    match Student::fetch(id, state.conn()).await? {
        Some(student) => {
            println!("Id:         {}", student.id());
            println!("First name: {}", student.first_name());
            println!("Last name:  {}", student.last_name());
        }
        None => println!("No student with id {id} exists."),
    }
    Ok(())
}

async fn update_first_name(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    let id = prompt_for_id(input)?;
    let first_name = prompt_for_name("new first", input)?;

    if Student::update_first_name(id, &first_name, state.conn()).await? {
        println!("First name updated for student {id}.");
    } else {
        println!("No student with id {id} exists.");
    }
    Ok(())
}

async fn update_last_name(state: &mut RosterState, input: &mut impl BufRead) -> RosterResult<()> {
    let id = prompt_for_id(input)?;
    let last_name = prompt_for_name("new last", input)?;

    if Student::update_last_name(id, &last_name, state.conn()).await? {
        println!("Last name updated for student {id}.");
    } else {
        println!("No student with id {id} exists.");
    }
    Ok(())
}

/// Re-prompts until the user enters a whole number.
fn prompt_for_id(input: &mut impl BufRead) -> RosterResult<i32> {
    loop {
        let line = prompt("Enter student id: ", input)?;
        match line.parse::<i32>() {
            Ok(id) => return Ok(id),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

fn prompt_for_name(which: &str, input: &mut impl BufRead) -> RosterResult<String> {
    prompt(&format!("Enter {which} name: "), input)
}

/// Prompts once. A closed input mid-action is an error; the caller has
/// already committed to a flow that needs an answer.
fn prompt(text: &str, input: &mut impl BufRead) -> RosterResult<String> {
    print!("{text}");
    io::stdout().flush().context(ConsoleIoSnafu)?;
    read_line(input)?.context(InputClosedSnafu)
}

/// Reads one line, trimmed. `Ok(None)` means the input reached EOF.
fn read_line(input: &mut impl BufRead) -> RosterResult<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context(ConsoleIoSnafu)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}
