use serde::{Deserialize, Serialize};

/// Token and member id of a logged-in member. Both must be present
/// together; gated operations take this by reference, so "no session" is
/// decided before any network call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionIdentity {
    pub token: String,
    pub member_id: String,
}

impl SessionIdentity {
    pub fn new(token: impl Into<String>, member_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            member_id: member_id.into(),
        }
    }

    /// Value for the Authorization header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
