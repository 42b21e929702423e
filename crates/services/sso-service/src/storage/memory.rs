//! In-memory storage fake for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use common::{AppError, AppResult, OptionExt};
use domain::{App, User};

use super::{AppProvider, UserProvider, UserSaver};

struct UserRecord {
    user: User,
    is_admin: bool,
}

/// Mutex-guarded in-memory implementation of all three storage ports.
///
/// Ids are assigned sequentially starting at 1 and never reused.
#[derive(Default)]
pub struct MemoryStorage {
    users: Mutex<Vec<UserRecord>>,
    apps: Mutex<HashMap<i32, App>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision an application (apps are read-only through the ports).
    pub fn add_app(&self, app: App) {
        self.apps.lock().unwrap().insert(app.id, app);
    }

    /// Grant or revoke admin privileges for a stored user.
    pub fn set_admin(&self, user_id: i64, is_admin: bool) {
        let mut users = self.users.lock().unwrap();
        if let Some(record) = users.iter_mut().find(|r| r.user.id == user_id) {
            record.is_admin = is_admin;
        }
    }
}

#[async_trait]
impl UserSaver for MemoryStorage {
    async fn save_user(&self, email: &str, pass_hash: &str) -> AppResult<i64> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|r| r.user.email == email) {
            return Err(AppError::UserAlreadyExists);
        }

        let id = users.len() as i64 + 1;
        users.push(UserRecord {
            user: User::new(id, email.to_string(), pass_hash.to_string()),
            is_admin: false,
        });

        Ok(id)
    }
}

#[async_trait]
impl UserProvider for MemoryStorage {
    async fn user_by_email(&self, email: &str) -> AppResult<User> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| r.user.clone())
            .ok_or_not_found("user")
    }

    async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|r| r.user.id == user_id)
            .map(|r| r.is_admin)
            .ok_or_not_found("user")
    }
}

#[async_trait]
impl AppProvider for MemoryStorage {
    async fn app(&self, app_id: i32) -> AppResult<App> {
        let apps = self.apps.lock().unwrap();
        apps.get(&app_id).cloned().ok_or_not_found("app")
    }
}
