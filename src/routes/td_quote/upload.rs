use actix_web::{post, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::td_quote::TdQuoteUploadRes;
use crate::utils::csv::parse_td_quote_csv;
use crate::utils::webutils::require_auth;

#[post("/upload")]
async fn upload(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<DbService>>,
    body: String,
) -> ApiResult<TdQuoteUploadRes> {
    require_auth(&auth)?;

    let (rows, errors) = parse_td_quote_csv(&body)?;
    let inserted = db.insert_td_quotes(rows).await?;

    Ok(ApiResponse::Ok(TdQuoteUploadRes { inserted, errors }))
}
