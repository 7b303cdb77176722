//! Team membership commands
//!
//! Each command collects its inputs, hands a [`BatchIntent`] to the batch
//! runner and prints the end-of-batch summary.

use log::debug;

use crate::batch::{BatchIntent, BatchRunner};
use crate::cli::prompt::Prompter;
use crate::client::GitHubApi;
use crate::error::Result;
use crate::output::{bold, table};

/// Run the add command: add one member to a team in every org
pub async fn add_member<C: GitHubApi + ?Sized>(
    client: &C,
    prompter: &mut dyn Prompter,
    orgs: &[String],
) -> Result<()> {
    heading(prompter, "Add member to a team in all orgs");
    let member = prompter.ask_required("who to add")?;
    let team = prompter.ask_required("which team")?;

    run_batch(client, prompter, BatchIntent::add(member, team), orgs).await
}

/// Run the remove command: remove one member from a team in every org
pub async fn remove_member<C: GitHubApi + ?Sized>(
    client: &C,
    prompter: &mut dyn Prompter,
    orgs: &[String],
) -> Result<()> {
    heading(prompter, "Remove member from a team in all orgs");
    let member = prompter.ask_required("who to remove")?;
    let team = prompter.ask_required("which team")?;

    run_batch(client, prompter, BatchIntent::remove(member, team), orgs).await
}

/// Run the show command: list a team's members in every org
pub async fn show_members<C: GitHubApi + ?Sized>(
    client: &C,
    prompter: &mut dyn Prompter,
    orgs: &[String],
) -> Result<()> {
    heading(prompter, "List members of a team in each org");
    let team = prompter.ask_required("which team")?;

    run_batch(client, prompter, BatchIntent::list(team), orgs).await
}

/// Run the compare command. Not implemented; makes no remote calls.
pub fn compare(prompter: &mut dyn Prompter) {
    heading(prompter, "Compare members of a team between the orgs");
    prompter.say("Not supported yet!");
}

fn heading(prompter: &mut dyn Prompter, title: &str) {
    prompter.newline();
    prompter.say(&bold(title));
}

async fn run_batch<C: GitHubApi + ?Sized>(
    client: &C,
    prompter: &mut dyn Prompter,
    intent: BatchIntent,
    orgs: &[String],
) -> Result<()> {
    debug!("running {:?} over {} orgs", intent, orgs.len());

    let report = BatchRunner::new(client, &mut *prompter)
        .run(&intent, orgs)
        .await?;

    match report {
        Some(report) => {
            prompter.newline();
            prompter.say(&table::format_report(&report));
            if !report.results.is_empty() {
                prompter.say(&report.counts().to_string());
            }
        }
        None => {
            prompter.newline();
            prompter.say("Nothing changed.");
        }
    }
    Ok(())
}
