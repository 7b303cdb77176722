//! API trait definitions split by responsibility
//!
//! This module organizes the GitHub API surface into focused sub-traits:
//! - [`AuthApi`] - Login health check
//! - [`ListingApi`] - User, team and member lookups
//! - [`TeamApi`] - Team membership mutations
//!
//! The [`GitHubApi`](super::GitHubApi) super-trait combines all three.

mod auth;
mod listing;
mod team;

pub use auth::AuthApi;
pub use listing::ListingApi;
pub use team::TeamApi;
