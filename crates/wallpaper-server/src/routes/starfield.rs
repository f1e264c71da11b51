// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Starfield wallpaper handlers.

use axum::{
	extract::{rejection::QueryRejection, Query},
	http::header,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use wallpaper_common_starfield::{poisson_disk_sampling, render_svg, Point, StarfieldParams};

use crate::error::ServerError;

const STAR_SIZE: f64 = 1.0;

/// Query parameters shared by the starfield endpoints. Missing values take
/// the generator defaults; a missing seed is drawn at random.
#[derive(Debug, Default, Deserialize)]
pub struct StarfieldQuery {
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub seed: Option<u64>,
	pub min_distance: Option<f64>,
}

impl StarfieldQuery {
	pub fn into_params(self) -> StarfieldParams {
		let defaults = StarfieldParams::default();
		StarfieldParams {
			width: self.width.unwrap_or(defaults.width),
			height: self.height.unwrap_or(defaults.height),
			min_distance: self.min_distance.unwrap_or(defaults.min_distance),
			attempts: defaults.attempts,
			seed: self.seed.unwrap_or_else(|| fastrand::u64(..)),
		}
	}
}

#[derive(Debug, Serialize)]
pub struct StarfieldResponse {
	pub width: u32,
	pub height: u32,
	pub seed: u64,
	pub min_distance: f64,
	pub points: Vec<Point>,
}

/// GET /api/starfield - Star positions as JSON.
pub async fn starfield_points(
	query: Result<Query<StarfieldQuery>, QueryRejection>,
) -> Result<Json<StarfieldResponse>, ServerError> {
	let Query(query) = query?;
	let params = query.into_params();
	let points = generate(params.clone()).await?;

	Ok(Json(StarfieldResponse {
		width: params.width,
		height: params.height,
		seed: params.seed,
		min_distance: params.min_distance,
		points,
	}))
}

/// GET /api/wallpaper.svg - Rendered starfield.
pub async fn starfield_svg(
	query: Result<Query<StarfieldQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
	let Query(query) = query?;
	let params = query.into_params();
	let (width, height) = (params.width, params.height);
	let points = generate(params).await?;
	let svg = render_svg(&points, width, height, STAR_SIZE);

	Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

async fn generate(params: StarfieldParams) -> Result<Vec<Point>, ServerError> {
	params.validate()?;
	tokio::task::spawn_blocking(move || poisson_disk_sampling(&params))
		.await
		.map_err(|e| ServerError::Internal(format!("starfield task failed: {e}")))?
		.map_err(ServerError::from)
}
