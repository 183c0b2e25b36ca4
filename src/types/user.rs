use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RRegister {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterRes {
    pub id: Uuid,
    pub username: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRes {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct VerifyRes {
    pub user_id: Uuid,
    pub username: String,
}
