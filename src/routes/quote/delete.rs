use actix_web::{delete, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::quote::QuoteDeleteRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::require_auth;

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<QuoteDeleteRes> {
    require_auth(&auth)?;

    db.delete_quote(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(QuoteDeleteRes {
        message: "Quote deleted successfully".to_string(),
    }))
}
