use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod products;

/// Register every catalog resource.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(products::find_all)
        .service(products::find_by_id)
        .service(products::insert)
        .service(products::update)
        .service(products::delete)
        .service(categories::find_all)
        .service(categories::find_by_id);
}

/// Error body returned by every resource.
#[derive(Debug, Serialize)]
pub struct StandardError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
}

fn error_body(status: StatusCode, error: &str, message: String, req: &HttpRequest) -> HttpResponse {
    HttpResponse::build(status).json(StandardError {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: error.to_string(),
        message,
        path: req.path().to_string(),
    })
}

/// Render a malformed request parameter.
pub fn bad_request(message: String, req: &HttpRequest) -> HttpResponse {
    error_body(StatusCode::BAD_REQUEST, "Bad request", message, req)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = error_body(err.status_code(), "Bad request", err.to_string(), req);
    InternalError::from_response(err, response).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = bad_request(err.to_string(), req);
    InternalError::from_response(err, response).into()
}

/// Map a service error onto its HTTP status and error body.
pub fn error_response(err: &ServiceError, req: &HttpRequest) -> HttpResponse {
    match err {
        ServiceError::NotFound { .. } => error_body(
            StatusCode::NOT_FOUND,
            "Resource not found",
            err.to_string(),
            req,
        ),
        ServiceError::IntegrityViolation(message) => error_body(
            StatusCode::BAD_REQUEST,
            "Database exception",
            message.clone(),
            req,
        ),
        ServiceError::Validation(message) => error_body(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Validation exception",
            message.clone(),
            req,
        ),
        ServiceError::Internal => error_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal error",
            err.to_string(),
            req,
        ),
    }
}
