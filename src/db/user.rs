use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::utils::token::new_id;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl DbService {
    pub async fn username_taken(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn create_user(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<UserModel, AppError> {
        if self.username_taken(&username).await? {
            return Err(AppError::AlreadyExists);
        }
        let model = UserActive {
            id: Set(new_id()),
            username: Set(username),
            password_hash: Set(password_hash),
            created_at: Set(Utc::now()),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }
}
