use actix_web::web;

pub mod auth;
pub mod health;
pub mod quote;
pub mod td_quote;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        // /quotes/random must be registered before /quotes/{id}.
        web::scope("/quotes")
            .service(quote::random::random)
            .service(quote::list::list)
            .service(quote::create::create)
            .service(quote::get::get_by_id)
            .service(quote::update::update)
            .service(quote::delete::delete),
    );
    cfg.service(
        web::scope("/tdquotes")
            .service(td_quote::list::list)
            .service(td_quote::authors::authors)
            .service(td_quote::upload::upload),
    );
    cfg.service(
        web::scope("/auth")
            .service(auth::register::register)
            .service(auth::login::login)
            .service(auth::verify::verify),
    );
}
