use actix_web::{post, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RRegister, RegisterRes};
use crate::utils::token::hash_password;

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RRegister>,
) -> ApiResult<RegisterRes> {
    let body = body.into_inner();

    // Stored trimmed so " ada " and "ada" are the same account.
    let username = body.username.trim().to_string();
    if username.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "username and password are required".to_string(),
        ));
    }

    let password_hash =
        hash_password(&body.password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db.create_user(username, password_hash).await?;

    Ok(ApiResponse::Created(RegisterRes {
        id: user.id,
        username: user.username,
    }))
}
