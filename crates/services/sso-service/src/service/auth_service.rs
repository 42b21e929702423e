//! Auth domain service - credential verification, registration and
//! privilege checks.
//!
//! Stateless aside from injected dependencies; every call is a single
//! request/response transaction with no retries and no shared mutable
//! state, so concurrent calls need no coordination.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{Hasher, Password};

use crate::storage::{AppProvider, UserProvider, UserSaver};
use crate::token::TokenIssuer;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and issue a token scoped to `app_id`.
    async fn login(&self, email: &str, password: &str, app_id: i32) -> AppResult<String>;

    /// Register a new user and return its id.
    async fn register_new_user(&self, email: &str, password: &str) -> AppResult<i64>;

    /// Check whether a user has admin privileges.
    async fn is_admin(&self, user_id: i64) -> AppResult<bool>;
}

/// Concrete implementation of AuthService over the storage ports.
pub struct Authenticator {
    user_saver: Arc<dyn UserSaver>,
    user_provider: Arc<dyn UserProvider>,
    app_provider: Arc<dyn AppProvider>,
    hasher: Hasher,
    tokens: TokenIssuer,
}

impl Authenticator {
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        hasher: Hasher,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: &str, password: &str, app_id: i32) -> AppResult<String> {
        const OP: &str = "auth.login";

        info!(op = OP, email, "logging in user");

        // The lookup exists only to obtain the stored hash; its not-found
        // case collapses into the same error as a wrong password so the
        // response never reveals whether the email is registered.
        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => user,
            Err(AppError::NotFound(_)) => {
                warn!(op = OP, email, "user not found");
                return Err(AppError::InvalidCredentials);
            }
            Err(e) => {
                error!(op = OP, email, error = %e, "failed to get user");
                return Err(e);
            }
        };

        if !Password::from_hash(user.pass_hash.as_str()).verify(password) {
            warn!(op = OP, email, "password mismatch");
            return Err(AppError::InvalidCredentials);
        }

        let app = match self.app_provider.app(app_id).await {
            Ok(app) => app,
            Err(e) => {
                error!(op = OP, app_id, error = %e, "failed to get app");
                return Err(e);
            }
        };

        let token = self.tokens.issue(&user, &app).map_err(|e| {
            error!(op = OP, app_id, error = %e, "failed to issue token");
            e
        })?;

        info!(op = OP, email, app_id, "user logged in");

        Ok(token)
    }

    async fn register_new_user(&self, email: &str, password: &str) -> AppResult<i64> {
        const OP: &str = "auth.register_new_user";

        info!(op = OP, email, "registering user");

        let pass_hash = self.hasher.hash_password(password).map_err(|e| {
            error!(op = OP, error = %e, "failed to hash password");
            AppError::from(e)
        })?;

        match self.user_saver.save_user(email, pass_hash.as_str()).await {
            Ok(id) => {
                info!(op = OP, email, user_id = id, "user registered");
                Ok(id)
            }
            Err(AppError::UserAlreadyExists) => {
                warn!(op = OP, email, "user already exists");
                Err(AppError::UserAlreadyExists)
            }
            Err(e) => {
                error!(op = OP, email, error = %e, "failed to save user");
                Err(e)
            }
        }
    }

    async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        const OP: &str = "auth.is_admin";

        info!(op = OP, user_id, "checking admin privileges");

        match self.user_provider.is_admin(user_id).await {
            Ok(is_admin) => {
                info!(op = OP, user_id, is_admin, "checked admin privileges");
                Ok(is_admin)
            }
            // An unknown user surfaces as InvalidAppId. The mapping is
            // suspect (it names the wrong entity) but existing callers
            // depend on it, so it stays until the owners sign off on a
            // change.
            Err(AppError::NotFound(_)) => {
                warn!(op = OP, user_id, "user not found");
                Err(AppError::InvalidAppId)
            }
            Err(e) => {
                error!(op = OP, user_id, error = %e, "failed to check admin privileges");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use domain::{App, HashParams, User};

    use crate::storage::{MockAppProvider, MockUserProvider, MockUserSaver};
    use crate::token::Claims;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const EMAIL: &str = "a@x.com";
    const PASSWORD: &str = "Secret123!";
    const APP_SECRET: &str = "test-secret";

    // Low cost to keep the suite fast
    fn test_hasher() -> Hasher {
        Hasher::new(HashParams {
            m_cost_kib: 1024,
            t_cost: 1,
            p_cost: 1,
        })
        .unwrap()
    }

    fn test_user() -> User {
        let hash = test_hasher().hash_password(PASSWORD).unwrap().into_string();
        User::new(1, EMAIL.to_string(), hash)
    }

    fn test_app() -> App {
        App::new(1, "test-app".to_string(), APP_SECRET.to_string())
    }

    fn authenticator(
        saver: MockUserSaver,
        provider: MockUserProvider,
        apps: MockAppProvider,
    ) -> Authenticator {
        Authenticator::new(
            Arc::new(saver),
            Arc::new(provider),
            Arc::new(apps),
            test_hasher(),
            TokenIssuer::new(Duration::hours(1)),
        )
    }

    #[tokio::test]
    async fn test_login_success_token_matches_user() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_user_by_email()
            .withf(|email| email == EMAIL)
            .returning(|_| Ok(test_user()));

        let mut apps = MockAppProvider::new();
        apps.expect_app()
            .withf(|&app_id| app_id == 1)
            .returning(|_| Ok(test_app()));

        let service = authenticator(MockUserSaver::new(), provider, apps);
        let token = service.login(EMAIL, PASSWORD, 1).await.unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(APP_SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();
        assert_eq!(decoded.claims.uid, 1);
        assert_eq!(decoded.claims.email, EMAIL);
        assert_eq!(decoded.claims.app_id, 1);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_user_by_email()
            .returning(|_| Ok(test_user()));

        let apps = MockAppProvider::new();

        let service = authenticator(MockUserSaver::new(), provider, apps);
        let result = service.login(EMAIL, "WrongPassword1!", 1).await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error_as_wrong_password() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_user_by_email()
            .returning(|_| Err(AppError::not_found("user")));

        let service = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());
        let result = service.login("unknown@x.com", "anything", 1).await;

        // Indistinguishable from a password mismatch
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_app_is_not_invalid_credentials() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_user_by_email()
            .returning(|_| Ok(test_user()));

        let mut apps = MockAppProvider::new();
        apps.expect_app()
            .returning(|_| Err(AppError::not_found("app")));

        let service = authenticator(MockUserSaver::new(), provider, apps);
        let result = service.login(EMAIL, PASSWORD, 42).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_login_empty_app_secret_fails_signing() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_user_by_email()
            .returning(|_| Ok(test_user()));

        let mut apps = MockAppProvider::new();
        apps.expect_app()
            .returning(|_| Ok(App::new(1, "broken".to_string(), String::new())));

        let service = authenticator(MockUserSaver::new(), provider, apps);
        let result = service.login(EMAIL, PASSWORD, 1).await;

        assert!(matches!(result, Err(AppError::Signing(_))));
    }

    #[tokio::test]
    async fn test_register_returns_new_id() {
        let mut saver = MockUserSaver::new();
        saver
            .expect_save_user()
            .withf(|email, pass_hash| email == EMAIL && pass_hash.starts_with("$argon2"))
            .returning(|_, _| Ok(1));

        let service = authenticator(saver, MockUserProvider::new(), MockAppProvider::new());
        let user_id = service.register_new_user(EMAIL, PASSWORD).await.unwrap();

        assert_eq!(user_id, 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut saver = MockUserSaver::new();
        saver
            .expect_save_user()
            .returning(|_, _| Err(AppError::UserAlreadyExists));

        let service = authenticator(saver, MockUserProvider::new(), MockAppProvider::new());
        let result = service.register_new_user(EMAIL, PASSWORD).await;

        assert!(matches!(result, Err(AppError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_is_admin_true() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_is_admin()
            .withf(|&user_id| user_id == 1)
            .returning(|_| Ok(true));

        let service = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());
        assert!(service.is_admin(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_unknown_user_maps_to_invalid_app_id() {
        let mut provider = MockUserProvider::new();
        provider
            .expect_is_admin()
            .returning(|_| Err(AppError::not_found("user")));

        let service = authenticator(MockUserSaver::new(), provider, MockAppProvider::new());
        let result = service.is_admin(999_999).await;

        // Pins the current (suspect) mapping
        assert!(matches!(result, Err(AppError::InvalidAppId)));
    }
}
