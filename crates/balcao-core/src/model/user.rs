use serde::{Deserialize, Serialize};

/// User - an operator account row
///
/// Users are created once via `create_user` changes and never updated or
/// deleted by the sync utility. The username is the natural key; insertion
/// is insert-if-absent, which is what makes re-applied batches idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username (natural key)
    pub username: String,

    /// Opaque credential, pre-hashed by the caller before submission
    pub password: String,

    /// Role name (e.g. "admin", "vendedor")
    pub role: String,
}

impl User {
    /// Create a new User
    pub fn new(username: String, password: String, role: String) -> Self {
        Self {
            username,
            password,
            role,
        }
    }
}
