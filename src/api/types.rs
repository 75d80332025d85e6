// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request parameters, response bodies, and server settings.

use crate::paginate::Page;
use crate::types::{GroupedHits, Hit, SearchResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Listen port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3001;

/// Shape of a `/search` response.
///
/// Grouping and pagination are independent: the paged layouts cut a page out
/// of the flat hit list first, and `group` then regroups that page by work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseLayout {
    pub group: bool,
    pub paginate: bool,
}

impl ResponseLayout {
    pub const GROUPED: Self = Self {
        group: true,
        paginate: false,
    };
    pub const PAGED: Self = Self {
        group: false,
        paginate: true,
    };
    pub const PAGED_GROUPED: Self = Self {
        group: true,
        paginate: true,
    };
}

impl Default for ResponseLayout {
    fn default() -> Self {
        Self::GROUPED
    }
}

impl FromStr for ResponseLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grouped" => Ok(Self::GROUPED),
            "paged" => Ok(Self::PAGED),
            "paged-grouped" | "paged_grouped" => Ok(Self::PAGED_GROUPED),
            other => Err(format!(
                "unknown layout '{}' (expected grouped, paged or paged-grouped)",
                other
            )),
        }
    }
}

/// Response compression policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Negotiate gzip or brotli from `Accept-Encoding`
    #[default]
    Auto,
    /// Always identity
    Off,
}

impl FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Compression::Auto),
            "off" | "none" => Ok(Compression::Off),
            other => Err(format!("unknown compression '{}' (expected auto or off)", other)),
        }
    }
}

/// HTTP-side settings. Search knobs live in `SearchConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub layout: ResponseLayout,
    pub compression: Compression,
    /// Served at `/` when set
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            layout: ResponseLayout::default(),
            compression: Compression::default(),
            static_dir: Some(PathBuf::from("./static")),
        }
    }
}

/// `GET /search` query string. Fields stay raw so each can fail with its own status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub syntax: Option<String>,
}

/// `GET /work` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkParams {
    pub t: Option<String>,
}

/// Error envelope for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupedResponse {
    pub works: Vec<GroupedHits>,
}

impl From<&SearchResult> for GroupedResponse {
    fn from(result: &SearchResult) -> Self {
        Self {
            works: result.works.iter().map(GroupedHits::from).collect(),
        }
    }
}

/// A page of hits regrouped by work.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedGroupedResponse {
    pub works: Vec<GroupedHits>,
    pub result_count: usize,
    pub result_limit: usize,
    pub page: usize,
    pub total_pages: usize,
}

impl From<Page<Hit>> for PagedGroupedResponse {
    fn from(page: Page<Hit>) -> Self {
        Self {
            result_count: page.result_count,
            result_limit: page.result_limit,
            page: page.page,
            total_pages: page.total_pages,
            works: SearchResult::regroup(page.results),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkResponse {
    pub title: String,
    pub contents: String,
}
