//! Mock GitHub API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ListingApi, TeamApi};
use super::models::{Team, User};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGitHubClient::new()
///     .with_user("alice").await
///     .with_team(Team::new(42, "platform", "acme")).await;
///
/// let teams = mock.list_teams("acme").await?;
/// assert_eq!(teams.len(), 1);
/// ```
#[derive(Default)]
pub struct MockGitHubClient {
    /// User returned from current_user; `None` fails the login check
    current_user: Arc<Mutex<Option<User>>>,
    /// Accounts known to get_user
    users: Arc<Mutex<Vec<User>>>,
    /// Teams per organization, in listing order
    teams: Arc<Mutex<HashMap<String, Vec<Team>>>>,
    /// Team members per team ID
    members: Arc<Mutex<HashMap<u64, Vec<User>>>>,
    /// Errors returned from get_user for a login
    user_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Errors returned from list_teams for an organization
    org_errors: Arc<Mutex<HashMap<String, ApiError>>>,
    /// Errors returned from membership calls for a team ID
    team_errors: Arc<Mutex<HashMap<u64, ApiError>>>,
    /// Value returned by successful add/remove calls
    mutation_result: Arc<Mutex<Option<bool>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub current_user: usize,
    pub get_user: usize,
    pub list_teams: usize,
    pub list_team_members: usize,
    pub add_team_member: usize,
    pub remove_team_member: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.current_user
            + self.get_user
            + self.list_teams
            + self.list_team_members
            + self.add_team_member
            + self.remove_team_member
    }

    /// Number of membership mutations issued.
    pub fn mutations(&self) -> usize {
        self.add_team_member + self.remove_team_member
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedRequest {
    ListTeams { org: String },
    ListMembers { team_id: u64 },
    AddMember { team_id: u64, login: String },
    RemoveMember { team_id: u64, login: String },
}

/// Build a user record with a predictable ID and avatar URL.
pub fn user(login: &str) -> User {
    let id = login.bytes().map(u64::from).sum();
    User {
        login: login.to_string(),
        id,
        avatar_url: format!("https://avatars.example.com/{}", login),
    }
}

impl MockGitHubClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the authenticated user returned by current_user.
    pub async fn with_current_user(self, login: &str) -> Self {
        *self.current_user.lock().await = Some(user(login));
        self
    }

    /// Register an account that get_user can find.
    pub async fn with_user(self, login: &str) -> Self {
        self.users.lock().await.push(user(login));
        self
    }

    /// Add a team to the listing of its organization.
    pub async fn with_team(self, team: Team) -> Self {
        self.teams
            .lock()
            .await
            .entry(team.organization.clone())
            .or_default()
            .push(team);
        self
    }

    /// Configure the members returned for a team.
    pub async fn with_members(self, team_id: u64, logins: &[&str]) -> Self {
        self.members
            .lock()
            .await
            .insert(team_id, logins.iter().map(|l| user(l)).collect());
        self
    }

    /// Make get_user fail for one login.
    pub async fn with_user_error(self, login: &str, error: ApiError) -> Self {
        self.user_errors.lock().await.insert(login.to_string(), error);
        self
    }

    /// Make list_teams fail for one organization.
    pub async fn with_org_error(self, org: &str, error: ApiError) -> Self {
        self.org_errors.lock().await.insert(org.to_string(), error);
        self
    }

    /// Make membership calls (list/add/remove) fail for one team.
    pub async fn with_team_error(self, team_id: u64, error: ApiError) -> Self {
        self.team_errors.lock().await.insert(team_id, error);
        self
    }

    /// Configure the boolean returned by successful add/remove calls.
    pub async fn with_mutation_result(self, applied: bool) -> Self {
        *self.mutation_result.lock().await = Some(applied);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    async fn capture(&self, request: CapturedRequest) {
        self.captured_requests.lock().await.push(request);
    }

    async fn team_error(&self, team_id: u64) -> Result<()> {
        match self.team_errors.lock().await.get(&team_id) {
            Some(e) => Err(e.clone().into()),
            None => Ok(()),
        }
    }

    async fn mutation_result(&self) -> bool {
        self.mutation_result.lock().await.unwrap_or(true)
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockGitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.call_count.lock().await.current_user += 1;

        self.current_user
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

// ============================================================================
// ListingApi Implementation
// ============================================================================

#[async_trait]
impl ListingApi for MockGitHubClient {
    async fn get_user(&self, login: &str) -> Result<User> {
        self.call_count.lock().await.get_user += 1;

        if let Some(e) = self.user_errors.lock().await.get(login) {
            return Err(e.clone().into());
        }

        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.login == login)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Not Found".to_string()).into())
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<Team>> {
        self.capture(CapturedRequest::ListTeams {
            org: org.to_string(),
        })
        .await;
        self.call_count.lock().await.list_teams += 1;

        if let Some(e) = self.org_errors.lock().await.get(org) {
            return Err(e.clone().into());
        }

        Ok(self
            .teams
            .lock()
            .await
            .get(org)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_team_members(&self, team_id: u64) -> Result<Vec<User>> {
        self.capture(CapturedRequest::ListMembers { team_id }).await;
        self.call_count.lock().await.list_team_members += 1;
        self.team_error(team_id).await?;

        Ok(self
            .members
            .lock()
            .await
            .get(&team_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// TeamApi Implementation
// ============================================================================

#[async_trait]
impl TeamApi for MockGitHubClient {
    async fn add_team_member(&self, team_id: u64, login: &str) -> Result<bool> {
        self.capture(CapturedRequest::AddMember {
            team_id,
            login: login.to_string(),
        })
        .await;
        self.call_count.lock().await.add_team_member += 1;
        self.team_error(team_id).await?;

        Ok(self.mutation_result().await)
    }

    async fn remove_team_member(&self, team_id: u64, login: &str) -> Result<bool> {
        self.capture(CapturedRequest::RemoveMember {
            team_id,
            login: login.to_string(),
        })
        .await;
        self.call_count.lock().await.remove_team_member += 1;
        self.team_error(team_id).await?;

        Ok(self.mutation_result().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockGitHubClient::new();

        assert!(mock.list_teams("acme").await.unwrap().is_empty());
        assert!(mock.list_team_members(1).await.unwrap().is_empty());
        assert!(matches!(
            mock.current_user().await,
            Err(Error::Api(ApiError::Unauthorized))
        ));
    }

    #[tokio::test]
    async fn test_mock_client_teams_scoped_by_org() {
        let mock = MockGitHubClient::new()
            .with_team(Team::new(1, "platform", "acme"))
            .await
            .with_team(Team::new(2, "infra", "acme"))
            .await
            .with_team(Team::new(3, "platform", "globex"))
            .await;

        let acme = mock.list_teams("acme").await.unwrap();
        assert_eq!(
            acme.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 2],
            "listing order is insertion order"
        );
        assert_eq!(mock.list_teams("globex").await.unwrap().len(), 1);
        assert!(mock.list_teams("initech").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_get_user() {
        let mock = MockGitHubClient::new().with_user("alice").await;

        assert_eq!(mock.get_user("alice").await.unwrap().login, "alice");
        assert!(matches!(
            mock.get_user("mallory").await,
            Err(Error::Api(ApiError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_mock_client_errors_are_sticky() {
        let mock = MockGitHubClient::new()
            .with_org_error("acme", ApiError::Forbidden)
            .await
            .with_team_error(7, ApiError::ServerError("boom".to_string()))
            .await;

        for _ in 0..2 {
            assert!(mock.list_teams("acme").await.is_err());
            assert!(mock.add_team_member(7, "alice").await.is_err());
        }
    }

    #[tokio::test]
    async fn test_mock_client_call_counts_and_captures() {
        let mock = MockGitHubClient::new()
            .with_mutation_result(false)
            .await;

        mock.list_teams("acme").await.unwrap();
        assert!(!mock.add_team_member(42, "alice").await.unwrap());
        assert!(!mock.remove_team_member(42, "alice").await.unwrap());

        let counts = mock.call_counts().await;
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.mutations(), 2);

        assert_eq!(
            mock.captured_requests().await,
            vec![
                CapturedRequest::ListTeams {
                    org: "acme".to_string()
                },
                CapturedRequest::AddMember {
                    team_id: 42,
                    login: "alice".to_string()
                },
                CapturedRequest::RemoveMember {
                    team_id: 42,
                    login: "alice".to_string()
                },
            ]
        );
    }
}
