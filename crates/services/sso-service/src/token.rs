//! Session token issuance.
//!
//! Tokens are compact HS256 JWTs signed with the target application's
//! secret. Verification is the token holder's job: parse with the app's
//! current secret, reject a bad signature or a past `exp`. Nothing here
//! verifies tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult};
use domain::{App, User};

/// Token claims payload.
///
/// The claim names are the wire contract shared with every verifying
/// consumer; they must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub uid: i64,
    pub email: String,
    #[serde(rename = "appID")]
    pub app_id: i32,
    pub exp: i64,
}

/// Issues tokens with a fixed, configured TTL.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Issue a token for `user`, scoped to `app`.
    ///
    /// # Errors
    /// Fails with a signing error when the app secret is empty (an empty
    /// MAC key must never sign anything).
    pub fn issue(&self, user: &User, app: &App) -> AppResult<String> {
        if app.secret.is_empty() {
            return Err(AppError::signing(format!(
                "app {} has an empty secret",
                app.id
            )));
        }

        let claims = Claims {
            uid: user.id,
            email: user.email.clone(),
            app_id: app.id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(app.secret.as_bytes()),
        )?;

        Ok(token)
    }
}
