// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP listener and public URL configuration.

use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Resolved HTTP settings.
///
/// `base_url` is the externally visible origin used for absolute links in
/// rendered pages. It never ends with `/`.
#[derive(Debug, Clone)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
	pub base_url: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		HttpConfigLayer::default().finalize()
	}
}

impl HttpConfig {
	/// Absolute URL for a site path such as `/en`.
	pub fn public_url(&self, path: &str) -> String {
		join_url(&self.base_url, path)
	}

	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		let Some(rest) = self
			.base_url
			.strip_prefix("http://")
			.or_else(|| self.base_url.strip_prefix("https://"))
		else {
			return Err(ConfigError::InvalidValue {
				key: "http.base_url".to_string(),
				message: format!("'{}' must start with http:// or https://", self.base_url),
			});
		};

		if rest.is_empty() || rest.contains(|c: char| c == '?' || c == '#') {
			return Err(ConfigError::InvalidValue {
				key: "http.base_url".to_string(),
				message: format!("'{}' must be an origin with an optional path", self.base_url),
			});
		}

		Ok(())
	}
}

/// Join an origin and a path with exactly one `/` between them.
fn join_url(base_url: &str, path: &str) -> String {
	format!(
		"{}/{}",
		base_url.trim_end_matches('/'),
		path.trim_start_matches('/')
	)
}

/// Partial HTTP settings from one source.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub base_url: Option<String>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
	}

	/// Fill gaps with defaults. Without an explicit `base_url` the origin
	/// follows the configured port on localhost.
	pub fn finalize(self) -> HttpConfig {
		let port = self.port.unwrap_or(DEFAULT_PORT);
		let base_url = match self.base_url {
			Some(url) => url.trim_end_matches('/').to_string(),
			None => format!("http://localhost:{port}"),
		};

		HttpConfig {
			host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
			port,
			base_url,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn with_base_url(url: &str) -> HttpConfig {
		HttpConfigLayer {
			base_url: Some(url.to_string()),
			..Default::default()
		}
		.finalize()
	}

	#[test]
	fn test_defaults() {
		let config = HttpConfig::default();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 5000);
		assert_eq!(config.base_url, "http://localhost:5000");
		assert!(config.validate().is_ok());
	}

	#[test]
	fn test_base_url_follows_port() {
		let config = HttpConfigLayer {
			port: Some(9090),
			..Default::default()
		}
		.finalize();
		assert_eq!(config.base_url, "http://localhost:9090");
	}

	#[test]
	fn test_trailing_slash_trimmed() {
		let config = with_base_url("https://wallpapers.example.com//");
		assert_eq!(config.base_url, "https://wallpapers.example.com");
		assert_eq!(config.public_url("/pl"), "https://wallpapers.example.com/pl");
	}

	#[test]
	fn test_public_url_under_path_prefix() {
		let config = with_base_url("https://example.com/wallpapers/");
		assert_eq!(
			config.public_url("api/wallpaper.svg"),
			"https://example.com/wallpapers/api/wallpaper.svg"
		);
	}

	#[test]
	fn test_validate_rejects_bad_base_urls() {
		for url in ["example.com", "ftp://example.com", "https://", "https://x.com/?a=1"] {
			let err = with_base_url(url).validate().unwrap_err();
			assert!(
				matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "http.base_url"),
				"{url}"
			);
		}
	}

	#[test]
	fn test_merge_keeps_unset_fields() {
		let mut base = HttpConfigLayer {
			host: Some("127.0.0.1".to_string()),
			port: Some(3000),
			base_url: None,
		};
		base.merge(HttpConfigLayer {
			port: Some(9000),
			..Default::default()
		});
		assert_eq!(base.host.as_deref(), Some("127.0.0.1"));
		assert_eq!(base.port, Some(9000));
		assert_eq!(base.base_url, None);
	}
}
