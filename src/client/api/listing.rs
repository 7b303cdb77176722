//! Listing API trait for lookups and collections

use async_trait::async_trait;

use crate::client::models::{Team, User};
use crate::error::Result;

/// Read operations for the GitHub API
///
/// Collection methods return every page, in the order the API returns them.
#[async_trait]
pub trait ListingApi: Send + Sync {
    /// Look up a user account by login handle.
    ///
    /// Returns `ApiError::NotFound` when the handle does not exist.
    async fn get_user(&self, login: &str) -> Result<User>;

    /// List all teams in an organization.
    async fn list_teams(&self, org: &str) -> Result<Vec<Team>>;

    /// List all members of a team.
    async fn list_team_members(&self, team_id: u64) -> Result<Vec<User>>;
}
