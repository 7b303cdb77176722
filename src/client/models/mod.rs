//! GitHub API data models
//!
//! Domain types returned by the GitHub REST API, organized by resource type.

mod team;
mod user;

pub use team::{Team, TeamMembership};
pub use user::User;
