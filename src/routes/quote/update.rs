use actix_web::{put, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::error::AppError;
use crate::types::quote::RQuoteUpdate;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::require_auth;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
    body: web::Json<RQuoteUpdate>,
) -> ApiResult<entity::quote::Model> {
    require_auth(&auth)?;

    if let Some(quote) = &body.quote {
        if quote.trim().is_empty() {
            return Err(AppError::Validation("quote must not be empty".to_string()));
        }
    }

    let updated = db
        .update_quote(&path.into_inner(), body.into_inner())
        .await?;
    Ok(ApiResponse::Ok(updated))
}
