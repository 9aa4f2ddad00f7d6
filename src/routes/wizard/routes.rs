use crate::access;
use crate::routes;
use actix_web::{middleware, web};

pub fn wizard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/wizard")
            .wrap(middleware::from_fn(access::reject_visitors_without_access))
            .route("", web::get().to(routes::get_wizard))
            .route("/field", web::post().to(routes::set_field))
            .route("/next", web::post().to(routes::next_step))
            .route("/back", web::post().to(routes::previous_step))
            .route("/generate", web::post().to(routes::generate_newsletter))
            .route("/preview", web::get().to(routes::preview_newsletter)),
    );
}
