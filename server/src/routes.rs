use actix_web::{error::InternalError, web, HttpResponse, ResponseError};
use crate::error::AppError;
use crate::handlers;

/// Configures the school routes, the health endpoint, and extractor error handling.
///
/// Expects a `web::Data<SchoolService>` to be registered on the app.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    cfg.service(
        web::resource("/health")
            .route(web::get().to(handlers::health::health_check))
    );

    cfg.service(
        web::resource("/addSchool")
            .route(web::post().to(handlers::school_handlers::add_school_handler))
    );
    cfg.service(
        web::resource("/listSchools")
            .route(web::get().to(handlers::school_handlers::list_schools_handler))
    );
    cfg.service(
        web::resource("/deleteAllSchools")
            .route(web::delete().to(handlers::school_handlers::delete_all_schools_handler))
    );
}

// Malformed bodies and query strings get the same error shape as handler validation.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_error = AppError::Validation(format!("Invalid JSON body: {}", err));
        let response: HttpResponse = app_error.error_response();
        InternalError::from_response(err, response).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let app_error = AppError::Validation(format!("Invalid query string: {}", err));
        let response: HttpResponse = app_error.error_response();
        InternalError::from_response(err, response).into()
    })
}
