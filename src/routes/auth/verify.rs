use actix_web::post;
use actix_web_httpauth::extractors::bearer::BearerAuth;
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::VerifyRes;
use crate::utils::webutils::require_auth;

#[post("/verify")]
async fn verify(_req: actix_web::HttpRequest, auth: BearerAuth) -> ApiResult<VerifyRes> {
    let claims = require_auth(&auth)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized)?;

    Ok(ApiResponse::Ok(VerifyRes {
        user_id,
        username: claims.username,
    }))
}
