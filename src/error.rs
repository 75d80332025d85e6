// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for loading and querying a corpus.
//!
//! Load-time errors (`Io`, `TitleNotFound`, `BoundaryOrder`, `NoTitles`) are
//! fatal: a process that hits one must not serve. Everything else is scoped to
//! a single request and is returned to the caller as a value.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("title {title:?} occurs {occurrences} time(s) in the corpus, expected at least 2")]
    TitleNotFound { title: String, occurrences: usize },

    #[error(
        "title {title:?} starts at byte {offset}, not after {previous:?} at byte {previous_offset}"
    )]
    BoundaryOrder {
        title: String,
        offset: usize,
        previous: String,
        previous_offset: usize,
    },

    #[error("title list is empty")]
    NoTitles,

    #[error("search query is empty")]
    EmptyQuery,

    #[error("invalid search pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("regex queries are not enabled")]
    RegexDisabled,

    #[error("work not found")]
    WorkNotFound(String),

    #[error("search deadline exceeded during {stage}")]
    DeadlineExceeded { stage: &'static str },
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Errors that leave the searcher unusable. Raised only by `Searcher::load`.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            FolioError::Io { .. }
                | FolioError::TitleNotFound { .. }
                | FolioError::BoundaryOrder { .. }
                | FolioError::NoTitles
        )
    }

    /// Errors caused by what the caller asked for rather than by the corpus.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FolioError::EmptyQuery | FolioError::RegexDisabled)
    }
}
