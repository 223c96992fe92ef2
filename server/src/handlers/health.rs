use actix_web::{web, HttpResponse, Responder};
use serde::{Serialize, Deserialize};

use crate::services::SchoolService;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}

/// The process is healthy even when the database is not; `database` reports which.
pub async fn health_check(school_service: web::Data<SchoolService>) -> impl Responder {
    let database = if school_service.database_available().await {
        "up"
    } else {
        "unavailable"
    };

    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
    };

    HttpResponse::Ok().json(response)
}
