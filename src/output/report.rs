//! Status lines printed while a batch runs

use crate::batch::{BatchIntent, OperationKind, OperationOutcome, OrgResult};
use crate::output::{bold, error_line, indent};

pub fn checking_org(org: &str) -> String {
    format!("Checking org '{}'...", bold(org))
}

pub fn member_found(login: &str, avatar_url: &str) -> Vec<String> {
    vec![
        format!("User '{}' is found on GitHub", bold(login)),
        format!("{}'s avatar: '{}'", bold(login), bold(avatar_url)),
    ]
}

pub fn member_not_found(login: &str) -> String {
    error_line(&format!("user '{}' is not a valid github user", bold(login)))
}

pub fn member_lookup_failed(login: &str, diagnostic: &str) -> String {
    error_line(&format!("could not look up user '{}': {}", bold(login), diagnostic))
}

pub fn confirm_member(login: &str) -> String {
    format!("is '{}' the correct user", bold(login))
}

/// Per-organization confirmation question for a mutating intent
pub fn confirm_org(intent: &BatchIntent, org: &str) -> String {
    let team = bold(&intent.team);
    match &intent.kind {
        OperationKind::AddMember { member } => {
            format!("add {} to {} in org {}", bold(member), team, bold(org))
        }
        OperationKind::RemoveMember { member } => {
            format!("remove {} from {} in org {}", bold(member), team, bold(org))
        }
        OperationKind::ListMembers => format!("list {} in org {}", team, bold(org)),
    }
}

fn action(intent: &BatchIntent) -> String {
    let team = bold(&intent.team);
    match &intent.kind {
        OperationKind::AddMember { member } => {
            format!("adding '{}' to team '{}'", bold(member), team)
        }
        OperationKind::RemoveMember { member } => {
            format!("removing '{}' from team '{}'", bold(member), team)
        }
        OperationKind::ListMembers => format!("listing team '{}'", team),
    }
}

/// Lines describing one organization's outcome
pub fn outcome_lines(intent: &BatchIntent, result: &OrgResult) -> Vec<String> {
    let org = bold(&result.org);
    match &result.outcome {
        OperationOutcome::Skipped(_) => vec![format!(
            "team '{}' not found in org '{}'...Skipped",
            bold(&intent.team),
            org
        )],
        OperationOutcome::PermissionDenied => {
            vec![error_line(&format!("not permitted to access org '{}'", org))]
        }
        OperationOutcome::Failed(diag) => vec![error_line(&format!(
            "{} in org '{}' failed: {}",
            action(intent),
            org,
            diag
        ))],
        OperationOutcome::Cancelled => {
            vec![format!("{} in org '{}'...Cancelled", action(intent), org)]
        }
        OperationOutcome::Succeeded => match &result.members {
            Some(members) => {
                let mut lines = vec![format!(
                    "team '{}' has {} members:",
                    bold(&intent.team),
                    members.len()
                )];
                lines.extend(members.iter().map(|login| indent(login)));
                lines
            }
            None => vec![format!("{} in org '{}'...Success", action(intent), org)],
        },
    }
}
