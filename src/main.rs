//! ghteams - manage GitHub team membership across several organizations

use clap::Parser;

mod batch;
mod cli;
mod client;
mod config;
mod error;
mod output;

use cli::prompt::TerminalPrompter;
use cli::{Cli, GlobalOptions, Session, menu, org};
use error::Result;
use output::error_line;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{}", error_line(&err.to_string()));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_module("ghteams", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let opts = GlobalOptions::from_cli(&cli);
    let mut prompter = TerminalPrompter::default();

    let session = Session::start(&opts, &mut prompter).await?;
    org::show(&mut prompter, &session.orgs);
    menu::run_loop(&session, &mut prompter).await
}
