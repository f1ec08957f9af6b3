use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug)]
pub enum RequestError {
    BadRequest,
    NotFound,
    Conflict,
    NotAuthorized,
    ServerError,
    DatabaseError(sqlx::Error),
}

#[derive(serde::Serialize)]
pub struct RequestErrorJson {
    msg: &'static str,
}

impl RequestErrorJson {
    pub fn new(msg: &'static str) -> RequestErrorJson {
        RequestErrorJson { msg }
    }
}

/// Classification boundary for storage failures. Constraint violations come
/// back from SQLite as database errors whose message names the constraint
/// class; everything unrecognized stays a `DatabaseError` and surfaces as a
/// generic 500.
impl From<sqlx::Error> for RequestError {
    fn from(value: sqlx::Error) -> Self {
        if let sqlx::Error::Database(e) = &value {
            let message = e.message();
            if message.contains("UNIQUE constraint failed") {
                return Self::Conflict;
            }
            if message.contains("FOREIGN KEY constraint failed")
                || message.contains("NOT NULL constraint failed")
                || message.contains("datatype mismatch")
                || message.contains("syntax error")
            {
                return Self::BadRequest;
            }
        }
        Self::DatabaseError(value)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let (status_code, json) = match self {
            RequestError::BadRequest => (
                StatusCode::BAD_REQUEST,
                RequestErrorJson::new("400 - Bad request"),
            ),
            RequestError::NotFound => (
                StatusCode::NOT_FOUND,
                RequestErrorJson::new("404 - Not found"),
            ),
            RequestError::Conflict => (
                StatusCode::CONFLICT,
                RequestErrorJson::new("409 - Conflict"),
            ),
            RequestError::NotAuthorized => (
                StatusCode::UNAUTHORIZED,
                RequestErrorJson::new("401 - Unauthorized"),
            ),
            RequestError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RequestErrorJson::new("500 - Internal server error"),
            ),
            RequestError::DatabaseError(e) => {
                tracing::error!(error = %e, "unclassified database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    RequestErrorJson::new("500 - Internal server error"),
                )
            }
        };
        (status_code, Json(json))
    }
}
