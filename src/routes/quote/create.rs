use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::quote::RQuoteCreate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::require_auth;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RQuoteCreate>,
) -> ApiResult<entity::quote::Model> {
    require_auth(&auth)?;

    if body.quote.trim().is_empty() {
        return Err(AppError::Validation("quote must not be empty".to_string()));
    }

    let quote = db.create_quote(body.into_inner()).await?;
    Ok(ApiResponse::Created(quote))
}
