// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Static asset handler.

use axum::{
	extract::{Request, State},
	http::{StatusCode, Uri},
	response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::api::AppState;

const PREFIX: &str = "/static";

/// GET /static/{*path} - Files from `paths.static_dir`.
pub async fn static_file(State(state): State<AppState>, mut request: Request) -> Response {
	let tail = request
		.uri()
		.path()
		.strip_prefix(PREFIX)
		.unwrap_or_default()
		.to_string();

	match tail.parse::<Uri>() {
		Ok(uri) => *request.uri_mut() = uri,
		Err(e) => {
			tracing::debug!(path = %tail, error = %e, "unroutable static path");
			return StatusCode::NOT_FOUND.into_response();
		}
	}

	match ServeDir::new(&state.static_dir).oneshot(request).await {
		Ok(response) => response.into_response(),
		Err(never) => match never {},
	}
}
