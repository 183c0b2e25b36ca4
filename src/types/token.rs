use serde::{Deserialize, Serialize};

/// JWT claims carried by the bearer token issued at login.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
