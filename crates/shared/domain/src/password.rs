//! Password hashing - the credential hasher for the SSO service.
//!
//! Wraps Argon2id behind a small value-object API. Cost factors are
//! injected at startup so deployments can tune the work factor without
//! code changes; an unsupported combination fails `Hasher` construction
//! (fatal misconfiguration, never a user-facing error).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::{DomainError, DomainResult};

/// Argon2 cost factors, injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub m_cost_kib: u32,
    /// Number of iterations
    pub t_cost: u32,
    /// Degree of parallelism
    pub p_cost: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            m_cost_kib: Params::DEFAULT_M_COST,
            t_cost: Params::DEFAULT_T_COST,
            p_cost: Params::DEFAULT_P_COST,
        }
    }
}

/// Hashes plaintext passwords with a fixed, configured cost.
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
}

impl Hasher {
    /// Build a hasher from the configured cost factors.
    ///
    /// # Errors
    /// Returns a password error when the cost combination is rejected by
    /// the Argon2 primitive.
    pub fn new(params: HashParams) -> DomainResult<Self> {
        let params = Params::new(params.m_cost_kib, params.t_cost, params.p_cost, None)
            .map_err(|e| DomainError::password(format!("unsupported hash cost: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    pub fn hash_password(&self, plain_text: &str) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("password hash failed: {e}")))?;

        Ok(Password {
            hash: hash.to_string(),
        })
    }
}

/// Password value object holding a PHC-encoded hash.
///
/// Immutable, compared by value. The cost parameters travel inside the
/// hash string, so verification needs no configuration.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose the hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a Password from an existing hash (from storage).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// A mismatch is `false`, never an error; a malformed stored hash also
    /// verifies as `false`.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}
