// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP route handlers.

pub mod assets;
pub mod health;
pub mod pages;
pub mod starfield;
