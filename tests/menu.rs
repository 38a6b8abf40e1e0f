//! Whole menu sessions driven from scripted input.

use roster::{config::Config, data::Student, error::RosterError, state::RosterState, ui};
use std::io::Cursor;
use tempfile::NamedTempFile;

async fn open_temp_store() -> (RosterState, NamedTempFile) {
    let file = NamedTempFile::new().expect("unable to create a temp db file");
    let config = Config::new(file.path().to_str().expect("temp path is not utf-8"));
    let state = RosterState::new(&config)
        .await
        .expect("unable to open the store");
    (state, file)
}

#[tokio::test]
async fn scripted_session_inserts_and_renames() {
    let (mut state, _file) = open_temp_store().await;

    // 1: insert (id 1, Ann Lee), 5: update last name (id 1, Smith), 6: exit.
    let script = "1\n1\nAnn\nLee\n5\n1\nSmith\n6\n";
    ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap();

    let ann = Student::fetch(1, state.conn())
        .await
        .unwrap()
        .expect("student 1 should exist");
    assert_eq!(ann.first_name(), "Ann");
    assert_eq!(ann.last_name(), "Smith");
}

#[tokio::test]
async fn scripted_session_walks_the_full_scenario() {
    let (mut state, _file) = open_temp_store().await;

    // Insert, fetch, rename the last name, fetch again, delete, fetch once
    // more, then exit: the classic lifetime of student 1.
    let script = "1\n1\nAnn\nLee\n3\n1\n5\n1\nSmith\n3\n1\n2\n1\n3\n1\n6\n";
    ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap();

    assert!(Student::fetch(1, state.conn()).await.unwrap().is_none());
}

#[tokio::test]
async fn invalid_menu_lines_are_skipped_and_the_loop_continues() {
    let (mut state, _file) = open_temp_store().await;

    let script = "9\nzero\n\n1\n2\nBea\nCruz\n6\n";
    ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap();

    let bea = Student::fetch(2, state.conn())
        .await
        .unwrap()
        .expect("student 2 should exist");
    assert_eq!(bea.first_name(), "Bea");
    assert_eq!(bea.last_name(), "Cruz");
}

#[tokio::test]
async fn duplicate_insert_is_reported_and_the_session_goes_on() {
    let (mut state, _file) = open_temp_store().await;

    let script = "1\n3\nAnn\nLee\n1\n3\nBob\nRay\n6\n";
    ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap();

    let kept = Student::fetch(3, state.conn())
        .await
        .unwrap()
        .expect("student 3 should exist");
    assert_eq!(kept.first_name(), "Ann");
    assert_eq!(kept.last_name(), "Lee");
}

#[tokio::test]
async fn blank_name_is_reported_and_the_session_goes_on() {
    let (mut state, _file) = open_temp_store().await;

    // The blank first name never reaches the store; the session still
    // reaches the exit choice under its own power.
    let script = "1\n8\n\nLee\n6\n";
    ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap();

    assert!(Student::fetch(8, state.conn()).await.unwrap().is_none());
}

#[tokio::test]
async fn eof_at_the_menu_exits_cleanly() {
    let (mut state, _file) = open_temp_store().await;

    ui::run_menu(&mut state, &mut Cursor::new(""))
        .await
        .unwrap();
}

#[tokio::test]
async fn eof_mid_action_ends_the_session() {
    let (mut state, _file) = open_temp_store().await;

    // Input dies between the id and the first name.
    let script = "1\n5\n";
    let err = ui::run_menu(&mut state, &mut Cursor::new(script))
        .await
        .unwrap_err();
    assert!(matches!(err, RosterError::InputClosed));

    assert!(Student::fetch(5, state.conn()).await.unwrap().is_none());
}
