// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	extract::rejection::QueryRejection,
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

/// Server error types.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Invalid request parameters.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// Invalid starfield parameters.
	#[error(transparent)]
	Starfield(#[from] wallpaper_common_starfield::StarfieldError),

	/// Locale configuration is inconsistent.
	#[error("Locale configuration error: {0}")]
	I18n(#[from] wallpaper_common_i18n::I18nError),

	/// Internal server error.
	#[error("Internal error: {0}")]
	Internal(String),
}

impl From<QueryRejection> for ServerError {
	fn from(rejection: QueryRejection) -> Self {
		ServerError::BadRequest(rejection.body_text())
	}
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error) = match &self {
			ServerError::BadRequest(_) | ServerError::Starfield(_) => {
				(StatusCode::BAD_REQUEST, "bad_request")
			}
			ServerError::I18n(_) | ServerError::Internal(_) => {
				tracing::error!(error = %self, "internal error");
				(StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
			}
		};

		let message = match status {
			StatusCode::INTERNAL_SERVER_ERROR => "An internal error occurred".to_string(),
			_ => self.to_string(),
		};

		let body = ErrorResponse {
			error: error.to_string(),
			message,
		};

		(status, Json(body)).into_response()
	}
}
