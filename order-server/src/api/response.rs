//! Shared response helpers for the plain `http.Error`-style handlers

use axum::body::Body;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use serde::Serialize;

use crate::utils::{AppError, AppResult};

/// Serialize `value` as a JSON 200 response
///
/// `what` names the payload in the client-facing error when encoding fails.
pub fn json<T: Serialize>(value: &T, what: &str) -> AppResult<Response> {
    let body = serde_json::to_vec(value).map_err(|e| {
        AppError::serialization(format!("could not marshal {what} response json"), e)
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(body),
    )
        .into_response())
}

/// Log the outcome of a request and turn it into a response
pub fn finish(outcome: AppResult<Response>) -> Response {
    match outcome {
        Ok(response) => {
            let status = response.status();
            tracing::info!("Status: {}", status);
            response
        }
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                tracing::error!("Error: {}; Status: {}", err.detail(), status);
            } else {
                tracing::warn!("Error: {}; Status: {}", err.detail(), status);
            }
            err.into_response()
        }
    }
}

/// Query string extraction with rejections mapped into [`AppError`]
pub fn params<T>(extracted: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    extracted
        .map(|Query(params)| params)
        .map_err(|rejection| {
            AppError::validation(format!("invalid query parameters: {}", rejection.body_text()))
        })
}

/// Required integer query parameter. An empty value counts as missing.
pub fn required_id(value: Option<&str>, name: &str) -> AppResult<i64> {
    let raw = value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::missing_param(name))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::invalid_param(name))
}
