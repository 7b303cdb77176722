//! CLI definition and interactive session commands

use clap::Parser;

pub mod args;
pub mod menu;
pub mod org;
pub mod prompt;
pub mod session;
pub mod team;

pub use args::GlobalOptions;
pub use session::Session;

/// ghteams - add, remove and list team members across GitHub organizations
#[derive(Parser, Debug)]
#[command(name = "ghteams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file listing the organizations (defaults to ./settings.yml)
    #[arg(long, env = "GHTEAMS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// GitHub API base URL, e.g. https://ghe.example.com/api/v3
    #[arg(long, env = "GHTEAMS_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Admin username (prompted when not given)
    #[arg(long, short = 'u', env = "GHTEAMS_USERNAME", hide_env = true)]
    pub username: Option<String>,

    /// Password or personal access token (prefer the environment variable)
    #[arg(long, env = "GHTEAMS_TOKEN", hide_env_values = true, hide = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, env = "GHTEAMS_DEBUG", hide_env = true)]
    pub debug: bool,
}
