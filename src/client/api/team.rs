//! Team API trait for membership changes

use async_trait::async_trait;

use crate::error::Result;

/// Team membership operations for the GitHub API
#[async_trait]
pub trait TeamApi: Send + Sync {
    /// Add a user to a team (or invite them, if they are not yet an org member).
    ///
    /// Returns `true` when the API accepted the change.
    async fn add_team_member(&self, team_id: u64, login: &str) -> Result<bool>;

    /// Remove a user from a team.
    ///
    /// Returns `true` when the API accepted the change.
    async fn remove_team_member(&self, team_id: u64, login: &str) -> Result<bool>;
}
