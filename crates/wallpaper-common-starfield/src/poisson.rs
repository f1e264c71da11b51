// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bridson's Poisson-disk sampling over a rectangle.

use std::f64::consts::{SQRT_2, TAU};

use serde::{Serialize, Serializer};

use crate::error::StarfieldError;

pub const MAX_DIMENSION: u32 = 4096;
pub const MIN_DISTANCE_RANGE: (f64, f64) = (4.0, 512.0);
pub const MAX_ATTEMPTS: u32 = 100;
/// Upper bound on background grid cells, which bounds the number of stars.
pub const MAX_GRID_CELLS: u64 = 1 << 18;

/// A star position in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	fn distance_squared(&self, other: &Point) -> f64 {
		let dx = self.x - other.x;
		let dy = self.y - other.y;
		dx * dx + dy * dy
	}
}

// Points go over the wire as `[x, y]` pairs.
impl Serialize for Point {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		[self.x, self.y].serialize(serializer)
	}
}

/// Parameters for one starfield.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldParams {
	pub width: u32,
	pub height: u32,
	/// Minimum distance between any two stars.
	pub min_distance: f64,
	/// Candidates tried around an active star before it is retired.
	pub attempts: u32,
	pub seed: u64,
}

impl Default for StarfieldParams {
	fn default() -> Self {
		Self {
			width: 1920,
			height: 1080,
			min_distance: 20.0,
			attempts: 30,
			seed: 0,
		}
	}
}

impl StarfieldParams {
	pub fn validate(&self) -> Result<(), StarfieldError> {
		check_dimension("width", self.width)?;
		check_dimension("height", self.height)?;

		let (min, max) = MIN_DISTANCE_RANGE;
		if !self.min_distance.is_finite() || self.min_distance < min || self.min_distance > max {
			return Err(StarfieldError::InvalidParams {
				field: "min_distance",
				message: format!("must be between {min} and {max}, got {}", self.min_distance),
			});
		}

		let cell_size = self.min_distance / SQRT_2;
		let cells = (f64::from(self.width) / cell_size).ceil() as u64
			* (f64::from(self.height) / cell_size).ceil() as u64;
		if cells > MAX_GRID_CELLS {
			return Err(StarfieldError::InvalidParams {
				field: "min_distance",
				message: format!(
					"{} is too small for a {}x{} canvas",
					self.min_distance, self.width, self.height
				),
			});
		}

		if self.attempts == 0 || self.attempts > MAX_ATTEMPTS {
			return Err(StarfieldError::InvalidParams {
				field: "attempts",
				message: format!("must be between 1 and {MAX_ATTEMPTS}, got {}", self.attempts),
			});
		}

		Ok(())
	}
}

fn check_dimension(field: &'static str, value: u32) -> Result<(), StarfieldError> {
	if value == 0 || value > MAX_DIMENSION {
		return Err(StarfieldError::InvalidParams {
			field,
			message: format!("must be between 1 and {MAX_DIMENSION}, got {value}"),
		});
	}
	Ok(())
}

/// Generate star positions.
///
/// Every point lies inside `[0, width) × [0, height)` and no two points are
/// closer than `min_distance`. The same parameters always produce the same
/// points.
pub fn poisson_disk_sampling(params: &StarfieldParams) -> Result<Vec<Point>, StarfieldError> {
	params.validate()?;

	let mut sampler = Sampler::new(params);
	let mut rng = fastrand::Rng::with_seed(params.seed);

	let r = rng.f64();
	sampler.add(Point {
		x: r * sampler.width,
		y: r * sampler.height,
	});

	while !sampler.active.is_empty() {
		let slot = rng.usize(..sampler.active.len());
		let base = sampler.points[sampler.active[slot]];

		let mut accepted = false;
		for _ in 0..params.attempts {
			let angle = rng.f64() * TAU;
			let radius = params.min_distance * (1.0 + rng.f64());
			let candidate = Point {
				x: base.x + radius * angle.cos(),
				y: base.y + radius * angle.sin(),
			};

			if sampler.accepts(&candidate) {
				sampler.add(candidate);
				accepted = true;
				break;
			}
		}

		if !accepted {
			sampler.active.swap_remove(slot);
		}
	}

	tracing::debug!(
		width = params.width,
		height = params.height,
		seed = params.seed,
		stars = sampler.points.len(),
		"generated starfield"
	);

	Ok(sampler.points)
}

struct Sampler {
	width: f64,
	height: f64,
	min_distance_sq: f64,
	cell_size: f64,
	grid_width: usize,
	grid_height: usize,
	/// Index into `points` of the sample occupying each cell.
	grid: Vec<Option<usize>>,
	points: Vec<Point>,
	active: Vec<usize>,
}

impl Sampler {
	fn new(params: &StarfieldParams) -> Self {
		let width = f64::from(params.width);
		let height = f64::from(params.height);
		// At most one sample per cell when the diagonal equals min_distance.
		let cell_size = params.min_distance / SQRT_2;
		let grid_width = (width / cell_size).ceil() as usize;
		let grid_height = (height / cell_size).ceil() as usize;

		Self {
			width,
			height,
			min_distance_sq: params.min_distance * params.min_distance,
			cell_size,
			grid_width,
			grid_height,
			grid: vec![None; grid_width * grid_height],
			points: Vec::new(),
			active: Vec::new(),
		}
	}

	fn cell(&self, point: &Point) -> (usize, usize) {
		let gx = ((point.x / self.cell_size) as usize).min(self.grid_width - 1);
		let gy = ((point.y / self.cell_size) as usize).min(self.grid_height - 1);
		(gx, gy)
	}

	fn add(&mut self, point: Point) {
		let (gx, gy) = self.cell(&point);
		let index = self.points.len();
		self.points.push(point);
		self.grid[gx + gy * self.grid_width] = Some(index);
		self.active.push(index);
	}

	fn accepts(&self, candidate: &Point) -> bool {
		if candidate.x < 0.0
			|| candidate.x >= self.width
			|| candidate.y < 0.0
			|| candidate.y >= self.height
		{
			return false;
		}

		let (cx, cy) = self.cell(candidate);
		let x_range = cx.saturating_sub(2)..(cx + 3).min(self.grid_width);
		for gy in cy.saturating_sub(2)..(cy + 3).min(self.grid_height) {
			for gx in x_range.clone() {
				if let Some(neighbor) = self.grid[gx + gy * self.grid_width] {
					if self.points[neighbor].distance_squared(candidate) < self.min_distance_sq {
						return false;
					}
				}
			}
		}

		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn params(width: u32, height: u32, min_distance: f64, seed: u64) -> StarfieldParams {
		StarfieldParams {
			width,
			height,
			min_distance,
			seed,
			..Default::default()
		}
	}

	fn assert_poisson(points: &[Point], p: &StarfieldParams) {
		for point in points {
			assert!(point.x >= 0.0 && point.x < f64::from(p.width));
			assert!(point.y >= 0.0 && point.y < f64::from(p.height));
		}
		let min_sq = p.min_distance * p.min_distance;
		for (i, a) in points.iter().enumerate() {
			for b in &points[i + 1..] {
				assert!(a.distance_squared(b) >= min_sq);
			}
		}
	}

	#[test]
	fn test_default_params_are_valid() {
		assert!(StarfieldParams::default().validate().is_ok());
	}

	#[test]
	fn test_same_seed_same_points() {
		let p = params(400, 300, 20.0, 42);
		assert_eq!(
			poisson_disk_sampling(&p).unwrap(),
			poisson_disk_sampling(&p).unwrap()
		);
	}

	#[test]
	fn test_different_seed_different_points() {
		let a = poisson_disk_sampling(&params(400, 300, 20.0, 1)).unwrap();
		let b = poisson_disk_sampling(&params(400, 300, 20.0, 2)).unwrap();
		assert_ne!(a, b);
	}

	#[test]
	fn test_points_respect_bounds_and_distance() {
		let p = params(500, 250, 15.0, 9);
		let points = poisson_disk_sampling(&p).unwrap();
		assert_poisson(&points, &p);
	}

	#[test]
	fn test_first_star_lies_on_diagonal() {
		for seed in [0, 1, 42, u64::MAX] {
			let points = poisson_disk_sampling(&params(400, 200, 20.0, seed)).unwrap();
			let first = points[0];
			assert!((first.x / 400.0 - first.y / 200.0).abs() < 1e-9, "seed {seed}");
		}
	}

	#[test]
	fn test_fills_canvas() {
		// A maximal sampling leaves no gap wider than 2r, so the count has a
		// lower bound well above a handful of points.
		let p = params(400, 400, 20.0, 3);
		let points = poisson_disk_sampling(&p).unwrap();
		assert!(points.len() > 100, "only {} stars", points.len());
	}

	#[test]
	fn test_tiny_canvas_yields_single_star() {
		let p = params(1, 1, 4.0, 0);
		let points = poisson_disk_sampling(&p).unwrap();
		assert_eq!(points.len(), 1);
	}

	#[test]
	fn test_rejects_zero_width() {
		let err = poisson_disk_sampling(&params(0, 100, 20.0, 0)).unwrap_err();
		assert!(matches!(err, StarfieldError::InvalidParams { field: "width", .. }));
	}

	#[test]
	fn test_rejects_oversized_height() {
		let err = poisson_disk_sampling(&params(100, MAX_DIMENSION + 1, 20.0, 0)).unwrap_err();
		assert!(matches!(err, StarfieldError::InvalidParams { field: "height", .. }));
	}

	#[test]
	fn test_rejects_bad_min_distance() {
		for d in [0.0, 3.9, 513.0, f64::NAN, f64::INFINITY] {
			let err = params(100, 100, d, 0).validate().unwrap_err();
			assert!(matches!(
				err,
				StarfieldError::InvalidParams {
					field: "min_distance",
					..
				}
			));
		}
	}

	#[test]
	fn test_rejects_dense_large_canvas() {
		let err = params(MAX_DIMENSION, MAX_DIMENSION, 4.0, 0).validate().unwrap_err();
		assert!(err.to_string().contains("too small"));
		assert!(params(1920, 1080, 4.0, 0).validate().is_ok());
	}

	#[test]
	fn test_rejects_zero_attempts() {
		let p = StarfieldParams {
			attempts: 0,
			..Default::default()
		};
		assert!(p.validate().is_err());
	}

	#[test]
	fn test_point_serializes_as_pair() {
		let json = serde_json::to_string(&Point { x: 1.5, y: 2.0 }).unwrap();
		assert_eq!(json, "[1.5,2.0]");
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(32))]

		#[test]
		fn sampling_invariants_hold(
			width in 1u32..300,
			height in 1u32..300,
			min_distance in 4.0f64..60.0,
			seed in any::<u64>(),
		) {
			let p = params(width, height, min_distance, seed);
			let points = poisson_disk_sampling(&p).unwrap();
			prop_assert!(!points.is_empty());
			assert_poisson(&points, &p);
		}
	}
}
