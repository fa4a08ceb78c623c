pub mod health_handler;
pub mod leeai_handler;
pub mod notebook_handler;

use actix_web::web;

/// JSON extractor settings shared by every route. The limit must fit whole
/// documents since context truncation happens after the body is parsed.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit)
}

/// Registers every route served by the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(health_handler::subjects)
        .service(leeai_handler::chat)
        .service(leeai_handler::generate)
        .service(leeai_handler::audio)
        .service(leeai_handler::video)
        .service(notebook_handler::list_notebooks)
        .service(notebook_handler::create_notebook)
        .service(notebook_handler::get_notebook)
        .service(notebook_handler::list_notes)
        .service(notebook_handler::create_note);
}
