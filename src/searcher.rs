// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded corpus and everything built from it.
//!
//! `Searcher::load` is the only state transition: it either produces a fully
//! built, immutable searcher or a fatal error. After that every method takes
//! `&self`, so one `Arc<Searcher>` can serve any number of threads without
//! locking.
//!
//! ```text
//!  load ──▶ Corpus ──▶ WorkBoundaries
//!              │
//!              └─────▶ TextIndex
//!
//!  search ──▶ find_all ──▶ attribute ──▶ make_snippet ──▶ SearchResult
//! ```

use crate::attribute::{attribute, Attribution};
use crate::boundaries::WorkBoundaries;
use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::deadline::Deadline;
use crate::error::{FolioError, Result};
use crate::index::TextIndex;
use crate::paginate::{paginate, Page};
use crate::query::{Query, QuerySyntax};
use crate::snippet::make_snippet;
use crate::types::{Hit, MatchSpan, SearchResult, Snippet, Work, WorkBoundary, WorkResult};
use std::path::Path;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many spans a work's snippets are assembled on the calling thread.
#[cfg(feature = "parallel")]
const PARALLEL_SNIPPET_THRESHOLD: usize = 256;

/// Immutable search state for one corpus.
#[derive(Debug)]
pub struct Searcher {
    corpus: Corpus,
    boundaries: WorkBoundaries,
    index: TextIndex,
    config: SearchConfig,
}

impl Searcher {
    /// Read the corpus at `path` and build the boundary and text indexes.
    pub fn load(path: impl AsRef<Path>, titles: &[String], config: SearchConfig) -> Result<Self> {
        let corpus = Corpus::load(path)?;
        Self::from_corpus(corpus, titles, config)
    }

    /// Build indexes over a corpus already in memory.
    pub fn from_corpus(corpus: Corpus, titles: &[String], config: SearchConfig) -> Result<Self> {
        let boundaries = WorkBoundaries::build(&corpus, titles)?;
        let index = TextIndex::build(&corpus);
        info!(
            works = boundaries.len(),
            front_matter_bytes = boundaries.first_offset().unwrap_or(0),
            "indexed corpus"
        );
        Ok(Self {
            corpus,
            boundaries,
            index,
            config,
        })
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn boundaries(&self) -> &[WorkBoundary] {
        self.boundaries.as_slice()
    }

    /// Canonical titles in corpus order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.boundaries.iter().map(|b| b.title.as_str())
    }

    /// `(title, offset, length)` for every work, length running to the next boundary.
    pub fn work_extents(&self) -> Vec<(&str, usize, usize)> {
        (0..self.boundaries.len())
            .filter_map(|i| {
                let range = self.boundaries.range(i, self.corpus.len())?;
                let title = self.boundaries.as_slice()[i].title.as_str();
                Some((title, range.start, range.len()))
            })
            .collect()
    }

    /// Deadline for a search starting now, from the configured timeout.
    pub fn deadline(&self) -> Deadline {
        Deadline::from_budget(self.config.timeout)
    }

    /// Compile a query, refusing regex syntax unless the config allows it.
    pub fn query(&self, raw: &str, syntax: QuerySyntax) -> Result<Query> {
        if syntax == QuerySyntax::Regex && !self.config.allow_regex {
            return Err(FolioError::RegexDisabled);
        }
        Query::parse(raw, syntax)
    }

    /// All spans for `query` in corpus order.
    pub fn find_all(&self, query: &Query, deadline: Deadline) -> Result<Vec<MatchSpan>> {
        self.index.find_all(&self.corpus, query, deadline)
    }

    /// Snippet for one span with the configured window and markers.
    pub fn make_snippet(&self, span: MatchSpan, query: &Query) -> Snippet {
        make_snippet(
            &self.corpus,
            span,
            query,
            self.config.context_bytes,
            &self.config.highlight,
        )
    }

    /// Literal search with the configured deadline.
    pub fn search(&self, raw: &str) -> Result<SearchResult> {
        let query = Query::literal(raw)?;
        self.search_query(&query, self.deadline())
    }

    /// Matches grouped by work, in canonical order.
    pub fn search_query(&self, query: &Query, deadline: Deadline) -> Result<SearchResult> {
        let spans = self.find_all(query, deadline)?;
        let groups = attribute(&spans, &self.boundaries, deadline)?;

        let works = groups
            .iter()
            .map(|group| {
                deadline.check("snippets")?;
                Ok(WorkResult {
                    title: self.boundaries.as_slice()[group.work].title.clone(),
                    snippets: self.snippets(group, query),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            query = query.as_str(),
            spans = spans.len(),
            works = works.len(),
            "search"
        );
        Ok(SearchResult { works })
    }

    /// One page of the flattened result list.
    pub fn search_page(&self, query: &Query, page: usize, deadline: Deadline) -> Result<Page<Hit>> {
        let result = self.search_query(query, deadline)?;
        Ok(paginate(
            &result.hits(),
            page,
            self.config.page_size,
            self.config.page_mode,
        ))
    }

    fn snippets(&self, group: &Attribution, query: &Query) -> Vec<Snippet> {
        #[cfg(feature = "parallel")]
        {
            if group.spans.len() >= PARALLEL_SNIPPET_THRESHOLD {
                return group
                    .spans
                    .par_iter()
                    .map(|&span| self.make_snippet(span, query))
                    .collect();
            }
        }
        group
            .spans
            .iter()
            .map(|&span| self.make_snippet(span, query))
            .collect()
    }

    /// Full text of one work, without its heading, trimmed.
    pub fn get_work(&self, title: &str) -> Result<Work> {
        let position = self
            .boundaries
            .position(title)
            .ok_or_else(|| FolioError::WorkNotFound(title.to_string()))?;
        let range = self
            .boundaries
            .range(position, self.corpus.len())
            .ok_or_else(|| FolioError::WorkNotFound(title.to_string()))?;

        // Boundaries point at the heading; the body starts after it
        let body_start = (range.start + title.len()).min(range.end);
        let contents = self.corpus.text()[body_start..range.end].trim();

        Ok(Work {
            title: title.to_string(),
            contents: contents.to_string(),
        })
    }
}
