//! GitHub API client
//!
//! The remote directory the session operates on: user lookup, team listing
//! and team membership changes, split across the traits in [`api`].

pub mod api;
pub mod github;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use api::{AuthApi, ListingApi, TeamApi};
pub use github::{Credentials, GitHubClient};
#[cfg(test)]
pub use mock::MockGitHubClient;

/// Full GitHub API surface used by the batch runner.
///
/// Implemented automatically for anything providing all three sub-traits.
pub trait GitHubApi: AuthApi + ListingApi + TeamApi {}

impl<T: AuthApi + ListingApi + TeamApi + ?Sized> GitHubApi for T {}
