//! Team lookup by name within one organization

use log::{debug, warn};

use crate::client::ListingApi;
use crate::client::models::Team;
use crate::error::Result;

/// Find a team by exact, case-sensitive name.
///
/// The team list is fetched fresh on every call. When several teams share
/// the name, the first one in API order wins and a warning is logged.
pub async fn resolve_team<C>(client: &C, org: &str, team_name: &str) -> Result<Option<Team>>
where
    C: ListingApi + ?Sized,
{
    let teams = client.list_teams(org).await?;
    debug!("org '{}' has {} teams", org, teams.len());

    let mut matches = teams.into_iter().filter(|t| t.name == team_name);
    let first = matches.next();
    let duplicates = matches.count();

    if let Some(team) = &first {
        debug!(
            "team '{}' in org '{}' has id {}",
            team.name, team.organization, team.id
        );
    }

    if let Some(team) = &first
        && duplicates > 0
    {
        warn!(
            "{} teams named '{}' in org '{}'; using the first (id {})",
            duplicates + 1,
            team_name,
            org,
            team.id
        );
    }

    Ok(first)
}
