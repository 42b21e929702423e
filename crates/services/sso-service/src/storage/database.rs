//! SeaORM-backed implementation of the storage ports.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};

use common::{AppError, AppResult, OptionExt};
use domain::{App, User};

use super::entities::app::Entity as AppEntity;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::{AppProvider, UserProvider, UserSaver};

/// Production storage backend implementing all three ports.
pub struct SqlStorage {
    db: DatabaseConnection,
}

impl SqlStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map an insert error, surfacing a unique-constraint hit on email as
/// the distinguishable duplicate-user condition.
fn map_save_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::UserAlreadyExists,
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserSaver for SqlStorage {
    async fn save_user(&self, email: &str, pass_hash: &str) -> AppResult<i64> {
        let active_model = ActiveModel {
            email: Set(email.to_string()),
            pass_hash: Set(pass_hash.to_string()),
            is_admin: Set(false),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(map_save_err)?;

        Ok(model.id)
    }
}

#[async_trait]
impl UserProvider for SqlStorage {
    async fn user_by_email(&self, email: &str) -> AppResult<User> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::from).ok_or_not_found("user")
    }

    async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        let result = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(|model| model.is_admin).ok_or_not_found("user")
    }
}

#[async_trait]
impl AppProvider for SqlStorage {
    async fn app(&self, app_id: i32) -> AppResult<App> {
        let result = AppEntity::find_by_id(app_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(App::from).ok_or_not_found("app")
    }
}
