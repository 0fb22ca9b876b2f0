#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod bot;
mod cli;
mod command;
mod constants;
mod error;
mod event;
mod fetch;
#[cfg(test)]
mod fixtures;
mod github;
mod reply;
mod slack;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();
    // Any error returned here ends the process with exit code 1
    bot::serve(cli).await
}
