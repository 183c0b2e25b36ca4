use actix_web::{post, web};
use std::sync::Arc;

use crate::config::config;
use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RLogin};
use crate::utils::token::{issue_token, verify_password};

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    // Unknown user and bad password both come back as 401.
    let user = match db.get_user_by_username(&body.username).await {
        Ok(user) => user,
        Err(AppError::NotFound) => return Err(AppError::Unauthorized),
        Err(e) => return Err(e),
    };

    let valid = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized);
    }

    let token = issue_token(&user.id, &user.username, &config().jwt_secret)?;
    Ok(ApiResponse::Ok(LoginRes { token }))
}
