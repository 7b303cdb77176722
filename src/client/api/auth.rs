//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::User;
use crate::error::Result;

/// Authentication operations for the GitHub API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Fetch the authenticated user. Used as the login health check.
    async fn current_user(&self) -> Result<User>;
}
