use actix_web::{middleware, web, App, HttpServer};
use log::info;
use square_garden::{
    api::routes::{configure, configure_docs},
    config::AppConfig,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (config, notices) = AppConfig::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    notices.iter().for_each(|notice| notice.log());

    let bind_addr = config.bind_addr.clone();
    info!("🌱 Square Garden API starting at http://{bind_addr}");
    info!("   GET  /api/plants");
    info!("   GET  /api/plants/{{id}}");
    info!("   POST /api/beds/preview");
    info!("   POST /api/beds/select");
    info!("   POST /api/month-day");
    info!("   POST /api/harvest");
    info!("   POST /api/timeline");
    if config.swagger {
        info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
        info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");
    }

    HttpServer::new(move || {
        let swagger = config.swagger;
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
            .configure(move |cfg| {
                if swagger {
                    configure_docs(cfg);
                }
            })
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("JSON deserialization error: {err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
