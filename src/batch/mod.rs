//! Multi-organization batch runner
//!
//! Applies one [`BatchIntent`] to every configured organization in order.
//! Each organization is isolated: a missing team, a permission problem or
//! any other remote failure is recorded as that organization's outcome and
//! the run moves on. Only two things stop a run early: the operator
//! rejecting the member identity before any organization is visited, and a
//! failing terminal (prompt errors are propagated).

mod outcome;
mod resolve;

pub use outcome::{BatchIntent, BatchReport, OperationKind, OperationOutcome, OrgResult};
pub use resolve::resolve_team;

use log::debug;

use crate::cli::prompt::Prompter;
use crate::client::GitHubApi;
use crate::client::models::Team;
use crate::error::{ApiError, Error, Result};
use crate::output::report;

/// Diagnostic recorded when a mutation call returns `false`
const NOT_APPLIED: &str = "request was not applied";

/// Runs batch intents against a client, talking to the operator through a prompter
pub struct BatchRunner<'a, C: ?Sized> {
    client: &'a C,
    prompter: &'a mut dyn Prompter,
}

impl<'a, C: GitHubApi + ?Sized> BatchRunner<'a, C> {
    pub fn new(client: &'a C, prompter: &'a mut dyn Prompter) -> Self {
        Self { client, prompter }
    }

    /// Run `intent` across `orgs`.
    ///
    /// Returns `None` when the operator rejects the member identity; no
    /// organization is visited in that case. Otherwise the report holds
    /// exactly one result per organization, in input order.
    pub async fn run(&mut self, intent: &BatchIntent, orgs: &[String]) -> Result<Option<BatchReport>> {
        if orgs.is_empty() {
            debug!("empty fleet, nothing to run");
            return Ok(Some(BatchReport {
                intent: intent.clone(),
                results: Vec::new(),
            }));
        }

        if let Some(member) = intent.kind.member() {
            self.report_member_lookup(member).await;
            if !self.prompter.confirm(&report::confirm_member(member))? {
                debug!("member '{}' rejected by operator", member);
                return Ok(None);
            }
        }

        let mut results = Vec::with_capacity(orgs.len());
        for org in orgs {
            results.push(self.run_org(intent, org).await?);
        }

        Ok(Some(BatchReport {
            intent: intent.clone(),
            results,
        }))
    }

    async fn report_member_lookup(&mut self, member: &str) {
        self.prompter.newline();
        match self.client.get_user(member).await {
            Ok(user) => {
                for line in report::member_found(&user.login, &user.avatar_url) {
                    self.prompter.say(&line);
                }
            }
            Err(Error::Api(ApiError::NotFound(_))) => {
                self.prompter.say(&report::member_not_found(member));
            }
            Err(err) => {
                self.prompter
                    .say(&report::member_lookup_failed(member, &err.to_string()));
            }
        }
    }

    async fn run_org(&mut self, intent: &BatchIntent, org: &str) -> Result<OrgResult> {
        self.prompter.newline();
        self.prompter.say(&report::checking_org(org));

        let result = match resolve_team(self.client, org, &intent.team).await {
            Ok(Some(team)) => self.apply(intent, org, &team).await?,
            Ok(None) => OrgResult::new(org, OperationOutcome::team_not_found()),
            Err(err) => OrgResult::new(org, OperationOutcome::from_error(&err)),
        };

        debug!("org '{}': {:?}", org, result.outcome);
        for line in report::outcome_lines(intent, &result) {
            self.prompter.say(&line);
        }
        Ok(result)
    }

    /// Confirm (for mutations) and perform the remote call for one team
    async fn apply(&mut self, intent: &BatchIntent, org: &str, team: &Team) -> Result<OrgResult> {
        if intent.kind.is_mutating() && !self.prompter.confirm(&report::confirm_org(intent, org))? {
            return Ok(OrgResult::new(org, OperationOutcome::Cancelled));
        }

        let result = match &intent.kind {
            OperationKind::AddMember { member } => {
                mutation_result(org, self.client.add_team_member(team.id, member).await)
            }
            OperationKind::RemoveMember { member } => {
                mutation_result(org, self.client.remove_team_member(team.id, member).await)
            }
            OperationKind::ListMembers => match self.client.list_team_members(team.id).await {
                Ok(users) => OrgResult::listed(org, users.into_iter().map(|u| u.login).collect()),
                Err(err) => OrgResult::new(org, OperationOutcome::from_error(&err)),
            },
        };
        Ok(result)
    }
}

fn mutation_result(org: &str, response: Result<bool>) -> OrgResult {
    let outcome = match response {
        Ok(true) => OperationOutcome::Succeeded,
        Ok(false) => OperationOutcome::Failed(NOT_APPLIED.to_string()),
        Err(err) => OperationOutcome::from_error(&err),
    };
    OrgResult::new(org, outcome)
}
