// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::searcher::Searcher;

use super::handlers::*;
use super::types::ServerConfig;

/// Application state shared across all handlers
pub struct AppState {
    pub searcher: Arc<Searcher>,
    pub config: ServerConfig,
    /// CRC of every setting that shapes a response body
    config_tag: u32,
}

impl AppState {
    pub fn new(searcher: Arc<Searcher>, config: ServerConfig) -> Self {
        let settings = serde_json::to_string(&(searcher.config(), &config)).unwrap_or_default();
        let config_tag = crc32fast::hash(settings.as_bytes());
        Self {
            searcher,
            config,
            config_tag,
        }
    }

    /// Key identifying a response body for this server and request target.
    pub fn request_key(&self, target: &str) -> String {
        format!("{:08x}{}", self.config_tag, target)
    }
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let state = Arc::new(state);

    let router = Router::new()
        .route("/search", get(search))
        .route("/work", get(work))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}
