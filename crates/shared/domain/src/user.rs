//! User domain entity.

use serde::{Deserialize, Serialize};

/// User identity record as stored by the SSO service.
///
/// Created once by registration and immutable afterwards from the
/// service's point of view. `pass_hash` is the opaque PHC-encoded
/// password hash, never the plaintext.
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub pass_hash: String,
}

// Don't expose the password hash in debug output (security)
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("pass_hash", &"[REDACTED]")
            .finish()
    }
}

impl User {
    pub fn new(id: i64, email: String, pass_hash: String) -> Self {
        Self {
            id,
            email,
            pass_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_hash() {
        let user = User::new(1, "test@example.com".to_string(), "$argon2id$...".to_string());
        let rendered = format!("{:?}", user);

        assert!(rendered.contains("test@example.com"));
        assert!(!rendered.contains("argon2id"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
