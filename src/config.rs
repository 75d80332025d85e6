// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.

use crate::paginate::PageMode;
use crate::snippet::Highlight;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bytes of context kept on each side of a match.
pub const DEFAULT_CONTEXT_BYTES: usize = 250;

/// Snippets per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default corpus file name.
pub const DEFAULT_CORPUS_FILE: &str = "completeworks.txt";

/// Knobs for search and snippet assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub context_bytes: usize,
    pub page_size: usize,
    pub page_mode: PageMode,
    pub highlight: Highlight,
    /// Accept `QuerySyntax::Regex` queries
    pub allow_regex: bool,
    /// Per-search time budget, unbounded when `None`
    pub timeout: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_bytes: DEFAULT_CONTEXT_BYTES,
            page_size: DEFAULT_PAGE_SIZE,
            page_mode: PageMode::Number,
            highlight: Highlight::default(),
            allow_regex: false,
            timeout: None,
        }
    }
}

impl SearchConfig {
    pub fn with_context_bytes(mut self, context_bytes: usize) -> Self {
        self.context_bytes = context_bytes;
        self
    }

    /// Page size, at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_page_mode(mut self, page_mode: PageMode) -> Self {
        self.page_mode = page_mode;
        self
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_regex(mut self, allow_regex: bool) -> Self {
        self.allow_regex = allow_regex;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
