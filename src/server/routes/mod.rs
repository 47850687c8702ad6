//! HTTP route modules

pub mod coach;
pub mod health;

use actix_web::web;

/// Path of the coaching endpoint
pub const COACH_PATH: &str = "/api/coach";
/// Path of the liveness probe
pub const HEALTH_PATH: &str = "/healthz";

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(COACH_PATH)
            .route(web::post().to(coach::coach))
            .default_service(web::to(coach::method_not_allowed)),
    )
    .route(HEALTH_PATH, web::get().to(health::healthz));
}
