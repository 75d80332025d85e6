// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive substring search over a single-file literary corpus.
//!
//! The corpus is one text file: a table of contents, then every work preceded
//! by its title heading. Loading builds two indexes over it, the work
//! boundaries and a suffix array over the case-folded text, and nothing
//! changes after that.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│  boundaries.rs   │────▶│ attribute.rs │
//! │ (text, fold,│     │ (title ─▶ offset)│     │ (span ─▶ work)│
//! │  checksum)  │     └──────────────────┘     └──────┬───────┘
//! └─────┬───────┘                                     │
//!       │             ┌──────────────────┐     ┌──────▼───────┐
//!       └────────────▶│    index.rs      │────▶│  snippet.rs  │
//!                     │ (SA-IS, find_all)│     │ (window, mark)│
//!                     └──────────────────┘     └──────┬───────┘
//!                                                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        searcher.rs                          │
//! │     search ─▶ SearchResult   search_page ─▶ Page<Hit>       │
//! │     get_work ─▶ Work                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                     api/ (axum, JSON, gzip/br)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use folio::{complete_works_titles, SearchConfig, Searcher};
//!
//! let searcher = Searcher::load("completeworks.txt", &complete_works_titles(), SearchConfig::default())?;
//! for work in searcher.search("love")?.works {
//!     println!("{}: {} matches", work.title, work.snippets.len());
//! }
//! let sonnets = searcher.get_work("THE SONNETS")?;
//! ```

pub mod api;
pub mod attribute;
pub mod boundaries;
pub mod config;
pub mod contracts;
pub mod corpus;
pub mod deadline;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
mod sais;
pub mod searcher;
pub mod snippet;
pub mod testing;
pub mod titles;
pub mod types;

pub use attribute::{attribute, Attribution};
pub use boundaries::WorkBoundaries;
pub use config::{SearchConfig, DEFAULT_CONTEXT_BYTES, DEFAULT_CORPUS_FILE, DEFAULT_PAGE_SIZE};
pub use corpus::Corpus;
pub use deadline::Deadline;
pub use error::{FolioError, Result};
pub use index::TextIndex;
pub use paginate::{paginate, total_pages, Page, PageMode};
pub use query::{Query, QuerySyntax};
pub use searcher::Searcher;
pub use snippet::{make_snippet, Highlight};
pub use titles::{complete_works_titles, load_titles, parse_titles, COMPLETE_WORKS_TITLES};
pub use types::{
    GroupedHits, Hit, MatchSpan, SearchResult, Snippet, Work, WorkBoundary, WorkResult,
};
