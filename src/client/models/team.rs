//! Team models

use serde::Deserialize;

/// Team within one organization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: u64,

    /// Team name, matched exactly when resolving
    pub name: String,

    /// Organization the team was listed from. Not part of the API payload;
    /// filled in by the client.
    #[serde(default)]
    pub organization: String,
}

#[cfg(test)]
impl Team {
    pub fn new(id: u64, name: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            organization: organization.into(),
        }
    }
}

/// Response body of a membership update
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembership {
    /// `active` or `pending` (pending when the user still has to accept an invite)
    pub state: String,
}
