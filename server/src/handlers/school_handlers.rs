use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::SchoolService;
use crate::utils::geo::Coordinates;
use crate::utils::school_validation::{parse_reference_point, validate_new_school};

#[derive(Debug, Serialize, Deserialize)]
pub struct AddSchoolRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSchoolResponse {
    pub message: String,
    pub school_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListSchoolsQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAllSchoolsResponse {
    pub message: String,
    pub affected_rows: u64,
}

/// POST /addSchool
pub async fn add_school_handler(
    school_service: web::Data<SchoolService>,
    req_body: web::Json<AddSchoolRequest>,
) -> AppResult<HttpResponse> {
    let AddSchoolRequest { name, address, latitude, longitude } = req_body.into_inner();
    let new_school = validate_new_school(name, address, latitude, longitude)?;

    let school_id = school_service.add_school(new_school).await?;

    Ok(HttpResponse::Created().json(AddSchoolResponse {
        message: "School added successfully".to_string(),
        school_id,
    }))
}

/// GET /listSchools?lat=..&lon=..
pub async fn list_schools_handler(
    school_service: web::Data<SchoolService>,
    query: web::Query<ListSchoolsQuery>,
) -> AppResult<HttpResponse> {
    let (lat, lon) = parse_reference_point(query.lat.as_deref(), query.lon.as_deref())?;

    let schools = school_service
        .list_schools_by_distance(Coordinates::new(lat, lon))
        .await?;

    Ok(HttpResponse::Ok().json(schools))
}

/// DELETE /deleteAllSchools
pub async fn delete_all_schools_handler(
    school_service: web::Data<SchoolService>,
) -> AppResult<HttpResponse> {
    let affected_rows = school_service.delete_all_schools().await?;

    Ok(HttpResponse::Ok().json(DeleteAllSchoolsResponse {
        message: "All school records deleted successfully".to_string(),
        affected_rows,
    }))
}
