//! Interactive command loop

use std::fmt;
use std::ops::ControlFlow;

use log::debug;

use crate::cli::prompt::Prompter;
use crate::cli::{Session, org, team};
use crate::client::GitHubApi;
use crate::error::Result;

const MENU_HEADER: &str = "*** Available commands ***";
const MENU_PROMPT: &str = "What do you want to do? orgs/add/remove/show/compare/quit";

/// Commands offered by the menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Orgs,
    Add,
    Remove,
    Show,
    Compare,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 6] = [
        MenuCommand::Orgs,
        MenuCommand::Add,
        MenuCommand::Remove,
        MenuCommand::Show,
        MenuCommand::Compare,
        MenuCommand::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MenuCommand::Orgs => "orgs",
            MenuCommand::Add => "add",
            MenuCommand::Remove => "remove",
            MenuCommand::Show => "show",
            MenuCommand::Compare => "compare",
            MenuCommand::Quit => "quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuCommand::Orgs => "show the orgs",
            MenuCommand::Add => "add a member to a team to all orgs",
            MenuCommand::Remove => "remove a member from a team from all orgs",
            MenuCommand::Show => "show members in a team in each org",
            MenuCommand::Compare => "compare team members in each org",
            MenuCommand::Quit => "exit program",
        }
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {}", self.name(), self.description())
    }
}

/// Run one command. `Break` means the operator chose to quit.
pub async fn dispatch<C: GitHubApi>(
    command: MenuCommand,
    session: &Session<C>,
    prompter: &mut dyn Prompter,
) -> Result<ControlFlow<()>> {
    debug!("{} chose menu command: {}", session.login, command.name());

    match command {
        MenuCommand::Orgs => org::show(prompter, &session.orgs),
        MenuCommand::Add => team::add_member(&session.client, prompter, &session.orgs).await?,
        MenuCommand::Remove => {
            team::remove_member(&session.client, prompter, &session.orgs).await?
        }
        MenuCommand::Show => {
            team::show_members(&session.client, prompter, &session.orgs).await?
        }
        MenuCommand::Compare => team::compare(prompter),
        MenuCommand::Quit => return Ok(ControlFlow::Break(())),
    }
    Ok(ControlFlow::Continue(()))
}

/// Show the menu and run commands until the operator quits
pub async fn run_loop<C: GitHubApi>(session: &Session<C>, prompter: &mut dyn Prompter) -> Result<()> {
    let items: Vec<String> = MenuCommand::ALL.iter().map(|c| c.to_string()).collect();

    loop {
        prompter.newline();
        prompter.newline();
        let choice = prompter.choose(MENU_HEADER, MENU_PROMPT, &items)?;

        if dispatch(MenuCommand::ALL[choice], session, prompter)
            .await?
            .is_break()
        {
            return Ok(());
        }
    }
}
