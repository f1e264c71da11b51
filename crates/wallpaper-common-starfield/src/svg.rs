// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! SVG rendering of a starfield.

use std::fmt::Write;

use crate::poisson::Point;

/// Render stars as white four-pointed sparkles on a black canvas.
///
/// `star_size` is the arm length of each sparkle in pixels.
pub fn render_svg(points: &[Point], width: u32, height: u32, star_size: f64) -> String {
	let mut svg = format!(
		r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">
<rect width="100%" height="100%" fill="black"/>
<g fill="white" stroke="white" stroke-width="1">
"#
	);

	for point in points {
		push_star(&mut svg, point, star_size);
	}

	svg.push_str("</g>\n</svg>\n");
	svg
}

// Cross through the centre plus four concave arcs between the arm tips.
fn push_star(svg: &mut String, p: &Point, s: f64) {
	let (x, y) = (p.x, p.y);
	let (left, right, top, bottom) = (x - s, x + s, y - s, y + s);
	// Writing to a String cannot fail.
	let _ = writeln!(
		svg,
		r#"<path d="M{left:.2} {y:.2}H{right:.2}M{x:.2} {top:.2}V{bottom:.2}M{x:.2} {top:.2}Q{x:.2} {y:.2} {right:.2} {y:.2}Q{x:.2} {y:.2} {x:.2} {bottom:.2}Q{x:.2} {y:.2} {left:.2} {y:.2}Q{x:.2} {y:.2} {x:.2} {top:.2}Z"/>"#
	);
}
