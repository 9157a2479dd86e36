// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use building_store::ServiceError;
use thiserror::Error;

use crate::api::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Service(e) => match e {
                ServiceError::MissingRequiredField(_) => StatusCode::BAD_REQUEST,
                ServiceError::AlreadyExists(_) => StatusCode::CONFLICT,
                ServiceError::Mismatch { .. } => StatusCode::CONFLICT,
                ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
                ServiceError::EmptyResult => StatusCode::NOT_FOUND,
                ServiceError::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Metric label for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Service(e) => match e {
                ServiceError::MissingRequiredField(_) => "missing_required_field",
                ServiceError::AlreadyExists(_) => "already_exists",
                ServiceError::Mismatch { .. } => "mismatch",
                ServiceError::NotFound(_) => "not_found",
                ServiceError::EmptyResult => "empty_result",
                ServiceError::StorageFailure => "storage_failure",
            },
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(ApiResponse::<()>::status(self.to_string()))).into_response()
    }
}
