use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<entity::quote::Model>> {
    Ok(ApiResponse::Ok(db.get_all_quotes().await?))
}
