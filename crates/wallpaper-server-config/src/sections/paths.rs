// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Server paths configuration section.

use serde::{Deserialize, Serialize};

fn default_static_dir() -> String {
	"./static".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathsConfigLayer {
	pub static_dir: Option<String>,
}

impl PathsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.static_dir.is_some() {
			self.static_dir = other.static_dir;
		}
	}

	pub fn finalize(self) -> PathsConfig {
		PathsConfig {
			static_dir: self.static_dir.unwrap_or_else(default_static_dir),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
	pub static_dir: String,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			static_dir: default_static_dir(),
		}
	}
}
