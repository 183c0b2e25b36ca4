use quote_api::config::{EnvConfig, CONFIG};
use quote_api::db::service::DbService;
use sea_orm::ConnectOptions;
use std::sync::Arc;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // Every test binary shares one process; first caller wins.
        let _ = CONFIG.set(test_config());

        // A single connection keeps the in-memory database alive and
        // visible across queries.
        let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
        opts.max_connections(1);

        let db = Arc::new(
            DbService::new(opts)
                .await
                .expect("Failed to initialize database"),
        );

        TestContext { db }
    }
}

pub fn test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use quote_api::types::quote::RQuoteCreate;
    use quote_api::types::user::RRegister;

    pub fn sample_quote() -> RQuoteCreate {
        RQuoteCreate {
            quote: "Simplicity is the soul of efficiency.".to_string(),
            display: Some(true),
        }
    }

    pub fn sample_hidden_quote() -> RQuoteCreate {
        RQuoteCreate {
            quote: "This one stays off the random pick.".to_string(),
            display: Some(false),
        }
    }

    pub fn sample_register(username: &str) -> RRegister {
        RRegister {
            username: username.to_string(),
            password: "hunter2hunter2".to_string(),
        }
    }
}
