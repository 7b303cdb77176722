//! Session startup
//!
//! Walks the startup states in order: collect credentials, verify the login,
//! load the organization fleet. Any failure ends the session before the
//! command loop starts; nothing is retried.

use log::debug;

use crate::cli::GlobalOptions;
use crate::cli::prompt::Prompter;
use crate::client::{Credentials, GitHubApi, GitHubClient};
use crate::config::Settings;
use crate::error::{ConfigError, Error, Result};
use crate::output::bold;

/// An authenticated session with its loaded fleet.
///
/// Built once at startup and passed by reference to every command.
pub struct Session<C> {
    /// Authenticated API client
    pub client: C,
    /// Login of the authenticated admin
    pub login: String,
    /// Organizations to operate over, in configured order
    pub orgs: Vec<String>,
}

impl Session<GitHubClient> {
    /// Start a session against GitHub.
    ///
    /// Settings are read up front for the API host and default username,
    /// but a missing or empty fleet is only reported after login succeeds.
    pub async fn start(opts: &GlobalOptions, prompter: &mut dyn Prompter) -> Result<Self> {
        let settings = Settings::load_at(opts.config_ref());
        let defaults = settings.as_ref().ok().cloned().unwrap_or_default();

        let api_host = defaults.api_host(opts.api_host_ref());
        validate_api_host(&api_host)?;

        let credentials = collect_credentials(opts, defaults.username.as_deref(), prompter)?;
        let client = GitHubClient::with_host(credentials, Some(api_host))?;
        debug!("using API host {}", client.base_url());

        Self::establish(client, settings, prompter).await
    }
}

impl<C: GitHubApi> Session<C> {
    /// Verify the login and load the fleet.
    pub async fn establish(
        client: C,
        settings: Result<Settings>,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let user = client.current_user().await.map_err(|err| match err {
            Error::Api(api) => Error::Login(api),
            other => other,
        })?;

        prompter.newline();
        prompter.say(&bold("Logging into GitHub...Success"));
        debug!("logged in as {} (id {})", user.login, user.id);

        let orgs = settings.and_then(|s| s.org_ids())?;
        debug!("loaded {} orgs", orgs.len());

        Ok(Self {
            client,
            login: user.login,
            orgs,
        })
    }
}

/// Gather the admin login, prompting for whatever was not supplied
pub fn collect_credentials(
    opts: &GlobalOptions,
    default_username: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<Credentials> {
    prompter.newline();
    prompter.say("GitHub login");

    let username = match opts.username.as_deref().or(default_username) {
        Some(username) => {
            prompter.say(&format!("admin username: {}", username));
            username.to_string()
        }
        None => prompter.ask_required("admin username")?,
    };

    let secret = match &opts.token {
        Some(token) => token.clone(),
        None => prompter.ask_secret("admin password")?,
    };

    Ok(Credentials::new(username, secret))
}

fn validate_api_host(api_host: &str) -> Result<()> {
    if api_host.starts_with("https://") || api_host.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "api_host must start with http:// or https://, got '{}'",
            api_host
        ))
        .into())
    }
}
