// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Starfield wallpaper generation.
//!
//! Stars are placed with Bridson's Poisson-disk sampling so that no two stars
//! are closer than a minimum distance, then rendered as four-pointed sparkles
//! on a black SVG canvas.
//!
//! # Example
//!
//! ```
//! use wallpaper_common_starfield::{poisson_disk_sampling, render_svg, StarfieldParams};
//!
//! let params = StarfieldParams {
//! 	width: 320,
//! 	height: 200,
//! 	seed: 7,
//! 	..Default::default()
//! };
//! let points = poisson_disk_sampling(&params).unwrap();
//! let svg = render_svg(&points, params.width, params.height, 1.0);
//! assert!(svg.starts_with("<svg"));
//! ```

mod error;
mod poisson;
mod svg;

pub use error::StarfieldError;
pub use poisson::{poisson_disk_sampling, Point, StarfieldParams};
pub use svg::render_svg;
