// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP interface.
//!
//! - `GET /search?q=<query>&page=<n>&syntax=regex`
//! - `GET /work?t=<title>`
//! - everything else falls through to the static directory
//!
//! Errors are `{"message": ...}` with 400 for caller mistakes and 500 for
//! everything else, including unknown titles.

pub mod encoding;
pub mod handlers;
pub mod router;
pub mod types;

pub use handlers::ApiError;
pub use router::{create_router, AppState};
pub use types::{Compression, ResponseLayout, ServerConfig, DEFAULT_PORT};
