//! Client application entity.

use serde::{Deserialize, Serialize};

/// A registered client application.
///
/// Read-only from the service's perspective; apps are provisioned out of
/// band. `secret` is the token-signing key scoping issued tokens to this
/// app: each app has exactly one active secret at a time.
#[derive(Clone, Serialize, Deserialize)]
pub struct App {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing)]
    pub secret: String,
}

// Don't expose the signing secret in debug output (security)
impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl App {
    pub fn new(id: i32, name: String, secret: String) -> Self {
        Self { id, name, secret }
    }
}
