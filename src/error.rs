use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

/// Closed error-kind set for the whole crate. Callers branch on the kind
/// (and on the stable `code` in the HTTP body), never on message text.
#[derive(Debug, ThisError)]
pub enum StockroomError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("schema initialization failed: {0}")]
    Init(String),
}

/// Classify a sqlx failure before it leaves the db layer.
/// Unique-constraint violations become `Conflict`; everything else stays
/// an infrastructure error.
pub fn classify_db_error(e: SqlxError) -> StockroomError {
    match &e {
        SqlxError::Database(db) if db.is_unique_violation() => {
            StockroomError::Conflict(db.message().to_string())
        }
        _ => StockroomError::Database(e),
    }
}

impl IntoResponse for StockroomError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            StockroomError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{entity} not found"),
                },
            ),
            StockroomError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION".to_string(),
                    message: msg.clone(),
                },
            ),
            StockroomError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".to_string(),
                    message: msg.clone(),
                },
            ),
            StockroomError::Database(_) | StockroomError::Init(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
