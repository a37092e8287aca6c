use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    api::{
        handlers::{
            beds::{post_preview, post_select},
            plants::{get_plant, list_plants},
            schedule::{post_harvest, post_month_day, post_timeline},
        },
        openapi::ApiDoc,
    },
    data::plants::built_in_library,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::Data::new(built_in_library()))
            .service(list_plants)
            .service(get_plant)
            .service(post_preview)
            .service(post_select)
            .service(post_month_day)
            .service(post_harvest)
            .service(post_timeline),
    );
}

/// Swagger UI at `/swagger-ui/` backed by `/api-docs/openapi.json`.
pub fn configure_docs(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
