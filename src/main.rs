use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use dive_storefront::config::AppConfig;
use dive_storefront::routes;
use dive_storefront::services::api_client::{HttpStoreApi, StoreApi};
use dive_storefront::services::lookup_limiter::LookupLimiter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    if config.jwt_secret.is_none() {
        log::warn!("JWT_SECRET not set, signed-in routes will reject every session");
    }

    let api: Arc<dyn StoreApi> = Arc::new(
        HttpStoreApi::new(&config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );
    log::info!("Using upstream API at {}", config.api_url);

    let api = web::Data::from(api);
    let limiter = web::Data::new(LookupLimiter::from_config(&config));
    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    log::info!("Attempting to bind to {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(api.clone())
            .app_data(config.clone())
            .app_data(limiter.clone())
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
