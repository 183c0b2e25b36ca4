use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/get")]
async fn list(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<entity::td_quote::Model>> {
    Ok(ApiResponse::Ok(db.get_all_td_quotes().await?))
}
