use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::types::{error::AppError, token::Claims};
use crate::utils::token::decode_token;

/// Decodes the bearer token on a protected route. Absent headers are
/// rejected earlier by the `BearerAuth` extractor itself.
pub fn require_auth(auth: &BearerAuth) -> Result<Claims, AppError> {
    decode_token(auth.token(), &config().jwt_secret)
}
