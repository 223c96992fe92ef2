use actix_web::{web, App, HttpServer, middleware::Logger};
use actix_cors::Cors;
use dotenv::dotenv;
use std::net::TcpListener;
use std::sync::Arc;

use schools_server::config::{self, AppSettings};
use schools_server::db::connection::{create_lazy_pool, create_pool, verify_connection};
use schools_server::db::repositories::{SchoolRepository, SchoolStore};
use schools_server::routes::configure_routes;
use schools_server::services::SchoolService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load application settings
    let app_settings: AppSettings = match config::init_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("Failed to load application settings: {}", e);
            log::error!("Cannot start server without valid settings");
            std::process::exit(1);
        }
    };

    // Database connection setup. A failed connection does not stop the server:
    // requests report the database as unavailable until it can be reached.
    let db_pool = match create_pool(&app_settings.database).await {
        Ok(pool) => {
            if let Err(e) = verify_connection(&pool).await {
                log::warn!("Database connection verification failed: {}", e);
            }
            pool
        }
        Err(e) => {
            log::error!("Database connection failed: {}", e);
            log::warn!("Starting in degraded mode; database requests will return 503 until it is reachable");
            create_lazy_pool(&app_settings.database)
        }
    };

    let school_repository = Arc::new(SchoolRepository::new(Arc::new(db_pool)));
    if let Err(e) = school_repository.ensure_schema().await {
        log::warn!("Schema setup deferred: {}", e);
    }

    let school_store: Arc<dyn SchoolStore> = school_repository;
    let school_service = web::Data::new(SchoolService::new(school_store));

    let host = &app_settings.server.host;
    let port = app_settings.server.port;

    log::info!("Starting server at http://{}:{}", host, port);

    let listener = TcpListener::bind(format!("{}:{}", host, port))?;
    let cors_origins = app_settings.server.cors_origins.clone();

    HttpServer::new(move || {
        let mut cors = Cors::default();

        if cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        cors = cors
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(school_service.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .run()
    .await
}
