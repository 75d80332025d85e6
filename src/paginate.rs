// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pagination over a flat result list.
//!
//! Two readings of `page` exist. `Number` is the usual one: page `p` holds
//! items `[(p - 1) * limit, p * limit)`. `Offset` treats `page` as a raw slice
//! start, `[p, p + limit)`, which is what earlier deployments of this service
//! returned; it is kept so existing clients can opt into identical output.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Interpretation of the `page` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageMode {
    /// 1-indexed page number
    #[default]
    Number,
    /// `page` is the index of the first item
    Offset,
}

impl FromStr for PageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "number" => Ok(PageMode::Number),
            "offset" => Ok(PageMode::Offset),
            other => Err(format!("unknown page mode '{}' (expected number or offset)", other)),
        }
    }
}

/// One page of results plus the counts a client needs to navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    pub result_count: usize,
    pub result_limit: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Number of pages needed for `count` items, `limit` per page.
#[inline]
pub fn total_pages(count: usize, limit: usize) -> usize {
    count.div_ceil(limit.max(1))
}

/// Slice `items` into one page.
///
/// Pages past the end are empty, never an error. `page` 0 reads as page 1 in
/// `Number` mode.
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize, mode: PageMode) -> Page<T> {
    let limit = limit.max(1);
    let start = match mode {
        PageMode::Number => page.max(1).saturating_sub(1).saturating_mul(limit),
        PageMode::Offset => page,
    };
    let start = start.min(items.len());
    let end = start.saturating_add(limit).min(items.len());

    Page {
        results: items[start..end].to_vec(),
        result_count: items.len(),
        result_limit: limit,
        page,
        total_pages: total_pages(items.len(), limit),
    }
}

impl<T> Page<T> {
    /// Convert the items of a page, keeping the counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            results: self.results.into_iter().map(f).collect(),
            result_count: self.result_count,
            result_limit: self.result_limit,
            page: self.page,
            total_pages: self.total_pages,
        }
    }
}
