use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::error::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Database unavailable: {0}")]
    Unavailable(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub error_type: String,
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Database(_) => "database_error",
            AppError::Unavailable(_) => "service_unavailable",
            AppError::Configuration(_) => "configuration_error",
        }
    }

    /// Message returned to the client. Persistence and internal details stay in the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::Configuration(msg) => msg.clone(),
            AppError::Database(_) => "Database error".to_string(),
            AppError::Unavailable(_) => "Database unavailable".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            log::error!("{}", self);
        }

        let error_response = ErrorResponse {
            error: self.public_message(),
            code: status_code.as_u16(),
            error_type: self.error_type().to_string(),
        };

        HttpResponse::build(status_code).json(error_response)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SqlxError> for AppError {
    fn from(error: SqlxError) -> Self {
        match error {
            SqlxError::Io(_) | SqlxError::Tls(_) | SqlxError::PoolTimedOut | SqlxError::PoolClosed => {
                AppError::Unavailable(error.to_string())
            }
            _ => AppError::Database(error.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Database("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(AppError::Unavailable("x".into()).status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(AppError::Configuration("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_connectivity_errors_are_unavailable() {
        assert!(matches!(AppError::from(SqlxError::PoolTimedOut), AppError::Unavailable(_)));
        assert!(matches!(AppError::from(SqlxError::PoolClosed), AppError::Unavailable(_)));
        assert!(matches!(AppError::from(SqlxError::RowNotFound), AppError::Database(_)));
    }

    #[actix_web::test]
    async fn test_database_detail_is_not_returned() {
        let error = AppError::Database("Table 'schools.schooldata' doesn't exist".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed.error, "Database error");
        assert_eq!(parsed.code, 500);
        assert_eq!(parsed.error_type, "database_error");
    }

    #[actix_web::test]
    async fn test_validation_message_is_returned() {
        let error = AppError::Validation("Latitude and longitude are required".into());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed.error, "Latitude and longitude are required");
        assert_eq!(parsed.code, 400);
    }
}
