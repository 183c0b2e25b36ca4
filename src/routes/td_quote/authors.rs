use actix_web::{get, web};
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};

#[get("/authors")]
async fn authors(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<String>> {
    Ok(ApiResponse::Ok(db.get_td_quote_authors().await?))
}
