// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! HTTP request handlers for the course API.

use crate::model::{Course, CoursePayload, ValidationError};
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// API error response
#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ApiError {
    fn not_found(id: &str) -> Self {
        Self {
            error: format!("course '{id}' not found"),
            code: 404,
            details: None,
        }
    }

    fn unprocessable(error: String, details: Option<Vec<String>>) -> Self {
        Self {
            error,
            code: 422,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable("invalid course payload".to_string(), Some(err.problems))
    }
}

/// GET /courses/
pub async fn list_courses(State(state): State<Arc<AppState>>) -> Json<Vec<Course>> {
    Json(state.registry.list().await)
}

/// POST /courses/
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Course>, ApiError> {
    let payload = parse_payload(&body)?;
    let course = state.registry.create(payload).await;
    Ok(Json(course))
}

/// GET /courses/{id}
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    state
        .registry
        .get(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(&id))
}

/// PUT /courses/{id}
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Course>, ApiError> {
    let payload = parse_payload(&body)?;
    state
        .registry
        .update(&id, payload)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(&id))
}

/// DELETE /courses/{id}
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Course>, ApiError> {
    state
        .registry
        .remove(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(&id))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let body = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
    });

    (StatusCode::OK, Json(body)).into_response()
}

/// Decode and validate a write request body before any registry access.
fn parse_payload(body: &[u8]) -> Result<CoursePayload, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::unprocessable(format!("invalid JSON body: {e}"), None))?;

    CoursePayload::from_value(&value).map_err(ApiError::from)
}
