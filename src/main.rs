use actix_web::{web, App, HttpServer};
use quote_api::config::{EnvConfig, CONFIG};
use quote_api::db::service::DbService;
use quote_api::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let db = Arc::new(
        DbService::new(config.db_url.as_str())
            .await
            .expect("Failed to initialize database"),
    );

    CONFIG.set(config).expect("Config already initialized");

    log::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
