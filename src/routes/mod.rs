// Route exports
pub mod errors;
pub mod fit;

pub use errors::{handle_json_payload_error, json_config, JsonError};

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(fit::configure),
    );
}
