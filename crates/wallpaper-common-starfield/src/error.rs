// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StarfieldError {
	#[error("Invalid {field}: {message}")]
	InvalidParams {
		field: &'static str,
		message: String,
	},
}
