//! User models

use serde::Deserialize;

/// GitHub user account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// Login handle
    pub login: String,

    /// Numeric account ID
    pub id: u64,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,
}
