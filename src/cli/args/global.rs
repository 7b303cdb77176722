//! Global CLI options for the session
//!
//! Collects the parsed flags and environment overrides in one place so the
//! session setup does not need to know about clap.

use crate::cli::Cli;

/// Options resolved from flags and environment variables.
///
/// # Precedence
///
/// CLI flag > environment variable > settings file > default. This struct
/// captures the flag/env layer; settings-file values are applied in
/// `Session::start`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Settings file path (defaults to ./settings.yml)
    pub config: Option<String>,

    /// GitHub API base URL override
    pub api_host: Option<String>,

    /// Admin username; prompted when absent
    pub username: Option<String>,

    /// Password or token; prompted (masked) when absent
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
            username: non_blank(cli.username.as_deref()),
            token: non_blank(cli.token.as_deref()),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
