use actix_web::{web, App};
use quote_api::config::config;
use quote_api::db::service::DbService;
use quote_api::utils::token::{hash_password, issue_token};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(quote_api::routes::configure_routes)
    }

    /// Creates a user straight in the database and returns a freshly
    /// issued bearer token for it.
    #[allow(dead_code)]
    pub async fn create_test_user(&self) -> (Uuid, String) {
        let suffix = Uuid::new_v4();
        let password_hash = hash_password("hunter2hunter2").expect("Failed to hash password");

        let user = self
            .db
            .create_user(format!("user-{}", suffix), password_hash)
            .await
            .expect("Failed to create user");

        let token = issue_token(&user.id, &user.username, &config().jwt_secret)
            .expect("Failed to issue token");

        (user.id, token)
    }
}
