use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/random")]
async fn random(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<entity::quote::Model> {
    Ok(ApiResponse::Ok(db.get_random_quote().await?))
}
