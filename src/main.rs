#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! restcli — send one GET or POST to a REST API and dump the JSON response.

mod cli;
mod client;
mod commands;
mod sink;
mod types;

use clap::Parser;

use cli::{Cli, init_tracing, write_error};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(err) = commands::dispatch(&cli) {
        tracing::debug!(code = err.code(), "command failed");
        write_error(&err, cli.json_errors);
        std::process::exit(1);
    }
}
