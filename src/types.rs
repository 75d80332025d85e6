// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between the index and the caller.
//!
//! | Type           | Lifetime     | Purpose                                   |
//! |----------------|--------------|-------------------------------------------|
//! | `WorkBoundary` | process      | Where a titled work begins in the corpus  |
//! | `MatchSpan`    | request      | One match of a query, in corpus bytes     |
//! | `Snippet`      | request      | Context window with the match highlighted |
//! | `WorkResult`   | request      | All snippets attributed to one work       |
//! | `SearchResult` | request      | Work results in canonical title order     |
//! | `Work`         | request      | A work's full text                        |
//!
//! # Invariants
//!
//! - **WorkBoundary**: boundaries of one corpus, read in title order, have
//!   strictly increasing offsets. `Attribution` is wrong without this.
//! - **MatchSpan**: `start < end ≤ corpus.len()`, and a list of spans produced
//!   by one query is sorted by `start` with `spans[i].end ≤ spans[i + 1].start`.
//! - **SearchResult**: every `WorkResult` has at least one snippet.
//!
//! All offsets are byte offsets into the original corpus text. The folded
//! (lower-cased) view has the same length, so offsets are interchangeable.

use serde::Serialize;
use std::ops::Range;

/// Start of a titled work: the byte offset of its heading in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkBoundary {
    pub title: String,
    pub offset: usize,
}

/// One occurrence of a query, possibly widened by a word character on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatchSpan {
    /// Inclusive start
    pub start: usize,
    /// Exclusive end
    pub end: usize,
}

impl MatchSpan {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "MatchSpan start {} > end {}", start, end);
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A context window around one match, already wrapped in highlight markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Corpus offset of the highlighted substring
    pub offset: usize,
    /// Rendered text: before + open marker + match + close marker + after
    pub text: String,
}

/// Snippets for one work, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkResult {
    pub title: String,
    pub snippets: Vec<Snippet>,
}

/// A flattened search hit: one snippet tagged with its work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub title: String,
    pub snippet: String,
}

/// Work results in canonical title order. Works without matches are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub works: Vec<WorkResult>,
}

impl SearchResult {
    /// Total number of snippets across all works.
    pub fn len(&self) -> usize {
        self.works.iter().map(|w| w.snippets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }

    /// Flatten into one list of hits, preserving work order then corpus order.
    pub fn hits(&self) -> Vec<Hit> {
        self.works
            .iter()
            .flat_map(|work| {
                work.snippets.iter().map(move |snippet| Hit {
                    title: work.title.clone(),
                    snippet: snippet.text.clone(),
                })
            })
            .collect()
    }

    /// Regroup a flat list of hits by consecutive title.
    ///
    /// Used after pagination: a page is a window over `hits()`, so hits of one
    /// work are always adjacent.
    pub fn regroup(hits: Vec<Hit>) -> Vec<GroupedHits> {
        let mut groups: Vec<GroupedHits> = Vec::new();
        for hit in hits {
            match groups.last_mut() {
                Some(group) if group.title == hit.title => group.results.push(hit.snippet),
                _ => groups.push(GroupedHits {
                    title: hit.title,
                    results: vec![hit.snippet],
                }),
            }
        }
        groups
    }
}

/// Snippet texts of one work, the shape the grouped response uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedHits {
    pub title: String,
    pub results: Vec<String>,
}

impl From<&WorkResult> for GroupedHits {
    fn from(work: &WorkResult) -> Self {
        Self {
            title: work.title.clone(),
            results: work.snippets.iter().map(|s| s.text.clone()).collect(),
        }
    }
}

/// Full text of a single work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Work {
    pub title: String,
    pub contents: String,
}
