// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use crate::error::FolioError;
use crate::paginate::Page;
use crate::query::QuerySyntax;
use crate::types::Hit;

use super::encoding::{json_response, not_modified, Revalidation};
use super::router::AppState;
use super::types::*;

/// Error wrapper for API handlers
#[derive(Debug)]
pub enum ApiError {
    Folio(FolioError),
    BadRequest(String),
    Internal(String),
}

impl From<FolioError> for ApiError {
    fn from(e: FolioError) -> Self {
        ApiError::Folio(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Folio(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Folio(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Folio(e) => e.to_string(),
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
        };
        if status.is_server_error() {
            warn!(%status, %message, "request failed");
        }
        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Body of a successful `/search`, in whichever layout the server uses.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SearchBody {
    Grouped(GroupedResponse),
    Paged(Page<Hit>),
    PagedGrouped(PagedGroupedResponse),
}

fn parse_page(raw: Option<&str>) -> Result<usize, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(1),
        Some(page) => page
            .parse::<usize>()
            .map_err(|_| ApiError::Internal(format!("invalid page number {:?}", page))),
    }
}

fn parse_syntax(raw: Option<&str>) -> Result<QuerySyntax, ApiError> {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("literal") => Ok(QuerySyntax::Literal),
        Some("regex") => Ok(QuerySyntax::Regex),
        Some(other) => Err(ApiError::BadRequest(format!(
            "unknown query syntax {:?}",
            other
        ))),
    }
}

/// Search the corpus
pub async fn search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let raw = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing search query in URL params".to_string()))?;
    let page = parse_page(params.page.as_deref())?;
    let syntax = parse_syntax(params.syntax.as_deref())?;

    let query = state.searcher.query(&raw, syntax)?;

    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/search");
    let key = state.request_key(target);
    let revalidation = Revalidation {
        corpus_checksum: state.searcher.corpus().checksum(),
        request_key: &key,
    };
    if let Some(response) = not_modified(&headers, state.config.compression, revalidation) {
        return Ok(response);
    }

    let layout = state.config.layout;
    let searcher = Arc::clone(&state.searcher);

    // Searches are CPU-bound; keep them off the async workers
    let body = tokio::task::spawn_blocking(move || -> Result<SearchBody, FolioError> {
        let deadline = searcher.deadline();
        if !layout.paginate {
            let result = searcher.search_query(&query, deadline)?;
            return Ok(SearchBody::Grouped(GroupedResponse::from(&result)));
        }
        let hits = searcher.search_page(&query, page, deadline)?;
        Ok(if layout.group {
            SearchBody::PagedGrouped(PagedGroupedResponse::from(hits))
        } else {
            SearchBody::Paged(hits)
        })
    })
    .await
    .map_err(|e| ApiError::Internal(format!("search task failed: {}", e)))??;

    Ok(json_response(
        StatusCode::OK,
        &body,
        &headers,
        state.config.compression,
        Some(revalidation),
    ))
}

/// Get the full text of one work
pub async fn work(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<WorkParams>,
) -> Result<Response, ApiError> {
    let title = params
        .t
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("missing title in URL params".to_string()))?;

    let target = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/work");
    let key = state.request_key(target);
    let revalidation = Revalidation {
        corpus_checksum: state.searcher.corpus().checksum(),
        request_key: &key,
    };
    if let Some(response) = not_modified(&headers, state.config.compression, revalidation) {
        return Ok(response);
    }

    let work = state.searcher.get_work(&title)?;
    let body = WorkResponse {
        title: work.title,
        contents: work.contents,
    };

    Ok(json_response(
        StatusCode::OK,
        &body,
        &headers,
        state.config.compression,
        Some(revalidation),
    ))
}
