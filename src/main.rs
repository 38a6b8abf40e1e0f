#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

#[macro_use]
extern crate tracing;

use roster::{config::Config, state::RosterState, ui};
use snafu::Report;
use std::io;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // A .env file is a convenience here, not a requirement.
    dotenvy::dotenv().ok();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    let config = Config::from_env();
    info!(db_path = config.db_path(), "starting the roster");

    let mut state = RosterState::new(&config)
        .await
        .expect("unable to open the student store");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    if let Err(e) = ui::run_menu(&mut state, &mut input).await {
        error!(?e, "session ended early");
        eprintln!("{}", Report::from_error(e));
    }

    if let Err(e) = state.sensible_shutdown().await {
        error!(?e, "shutdown failed");
        eprintln!("{}", Report::from_error(e));
    }
}
