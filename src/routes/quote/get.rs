use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/{id}")]
async fn get_by_id(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<entity::quote::Model> {
    Ok(ApiResponse::Ok(db.get_quote(&path.into_inner()).await?))
}
