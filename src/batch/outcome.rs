//! Batch intents and per-organization outcomes

use std::fmt;

use crate::error::{ApiError, Error};

/// Reason recorded when a team does not exist in an organization
pub const TEAM_NOT_FOUND: &str = "team not found";

/// What a batch does in every organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKind {
    AddMember { member: String },
    RemoveMember { member: String },
    ListMembers,
}

impl OperationKind {
    /// Member targeted by a mutating operation
    pub fn member(&self) -> Option<&str> {
        match self {
            OperationKind::AddMember { member } | OperationKind::RemoveMember { member } => {
                Some(member)
            }
            OperationKind::ListMembers => None,
        }
    }

    pub fn is_mutating(&self) -> bool {
        self.member().is_some()
    }
}

/// One operator request, applied unchanged to every organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchIntent {
    pub team: String,
    pub kind: OperationKind,
}

impl BatchIntent {
    pub fn add(member: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            kind: OperationKind::AddMember {
                member: member.into(),
            },
        }
    }

    pub fn remove(member: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            kind: OperationKind::RemoveMember {
                member: member.into(),
            },
        }
    }

    pub fn list(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            kind: OperationKind::ListMembers,
        }
    }
}

/// Terminal status of one organization in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Skipped(String),
    PermissionDenied,
    Failed(String),
    Succeeded,
    Cancelled,
}

impl OperationOutcome {
    pub fn team_not_found() -> Self {
        OperationOutcome::Skipped(TEAM_NOT_FOUND.to_string())
    }

    /// Classify a remote failure for one organization.
    ///
    /// Permission problems are reported on their own; anything else keeps
    /// its kind and message as the diagnostic.
    pub fn from_error(err: &Error) -> Self {
        match err {
            Error::Api(ApiError::Forbidden) => OperationOutcome::PermissionDenied,
            other => OperationOutcome::Failed(format!("{}: {}", other.kind(), other)),
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationOutcome::Skipped(reason) => write!(f, "Skipped ({})", reason),
            OperationOutcome::PermissionDenied => write!(f, "Permission denied"),
            OperationOutcome::Failed(diag) => write!(f, "Failed ({})", diag),
            OperationOutcome::Succeeded => write!(f, "Success"),
            OperationOutcome::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Outcome for one organization, plus member logins for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgResult {
    pub org: String,
    pub outcome: OperationOutcome,
    pub members: Option<Vec<String>>,
}

impl OrgResult {
    pub fn new(org: &str, outcome: OperationOutcome) -> Self {
        Self {
            org: org.to_string(),
            outcome,
            members: None,
        }
    }

    pub fn listed(org: &str, members: Vec<String>) -> Self {
        Self {
            org: org.to_string(),
            outcome: OperationOutcome::Succeeded,
            members: Some(members),
        }
    }
}

/// Results of one batch run, in fleet order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub intent: BatchIntent,
    pub results: Vec<OrgResult>,
}

impl BatchReport {
    pub fn counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for result in &self.results {
            match result.outcome {
                OperationOutcome::Succeeded => counts.succeeded += 1,
                OperationOutcome::Skipped(_) => counts.skipped += 1,
                OperationOutcome::Cancelled => counts.cancelled += 1,
                OperationOutcome::PermissionDenied => counts.denied += 1,
                OperationOutcome::Failed(_) => counts.failed += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
impl BatchReport {
    pub fn outcomes(&self) -> Vec<(&str, &OperationOutcome)> {
        self.results
            .iter()
            .map(|r| (r.org.as_str(), &r.outcome))
            .collect()
    }
}

/// Tally of outcomes by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub succeeded: usize,
    pub skipped: usize,
    pub cancelled: usize,
    pub denied: usize,
    pub failed: usize,
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} succeeded, {} skipped, {} cancelled, {} denied, {} failed",
            self.succeeded, self.skipped, self.cancelled, self.denied, self.failed
        )
    }
}
