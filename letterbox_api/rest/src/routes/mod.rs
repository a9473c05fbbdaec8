use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiErrors, ApiMessage};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    message(StatusCode::INTERNAL_SERVER_ERROR, false, "Internal server error.")
}

fn message(code: StatusCode, success: bool, message: &'static str) -> Response {
    (code, Json(ApiMessage { success, message })).into_response()
}

fn errors(code: StatusCode, errors: Vec<String>) -> Response {
    (code, Json(ApiErrors {
        success: false,
        errors,
    }))
    .into_response()
}
