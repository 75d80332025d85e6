// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Work boundary index: where each titled work starts.
//!
//! A corpus opens with a table of contents that lists every title once, then
//! repeats each title as the heading of its work. The heading is therefore the
//! *second* case-sensitive occurrence of the title, and that offset is the
//! work's boundary.
//!
//! ```text
//!  TOC            work 0              work 1              work 2
//! ┌──────────┬───────────────────┬───────────────────┬──────────────────▶
//! │ A B C    │ A ...             │ B ...             │ C ...
//! └──────────┴───────────────────┴───────────────────┴──────────────────▶
//!            ▲                   ▲                   ▲
//!        boundary[0]         boundary[1]         boundary[2]      (unbounded)
//! ```
//!
//! # Invariants
//!
//! 1. **TWO_OCCURRENCES**: every title occurs at least twice, else `TitleNotFound`
//! 2. **STRICTLY_INCREASING**: `boundary[i].offset < boundary[i + 1].offset`,
//!    else `BoundaryOrder`. The attributor's single forward sweep relies on it.
//!
//! Work `i` owns the half-open byte range `[boundary[i], boundary[i + 1])`;
//! the last work runs to the end of the corpus.

use crate::corpus::Corpus;
use crate::error::{FolioError, Result};
use crate::types::WorkBoundary;
use std::collections::HashMap;
use std::ops::Range;

/// Ordered work boundaries plus a title lookup table.
#[derive(Debug, Clone)]
pub struct WorkBoundaries {
    boundaries: Vec<WorkBoundary>,
    by_title: HashMap<String, usize>,
}

impl WorkBoundaries {
    /// Locate every title's heading in the original-case corpus.
    pub fn build(corpus: &Corpus, titles: &[String]) -> Result<Self> {
        if titles.is_empty() {
            return Err(FolioError::NoTitles);
        }

        let text = corpus.text();
        let mut boundaries: Vec<WorkBoundary> = Vec::with_capacity(titles.len());

        for title in titles {
            // An empty needle would match at every offset
            let occurrences: Vec<usize> = if title.is_empty() {
                Vec::new()
            } else {
                text.match_indices(title.as_str())
                    .map(|(offset, _)| offset)
                    .take(2)
                    .collect()
            };

            let Some(&offset) = occurrences.get(1) else {
                return Err(FolioError::TitleNotFound {
                    title: title.clone(),
                    occurrences: occurrences.len(),
                });
            };

            if let Some(previous) = boundaries.last() {
                if offset <= previous.offset {
                    return Err(FolioError::BoundaryOrder {
                        title: title.clone(),
                        offset,
                        previous: previous.title.clone(),
                        previous_offset: previous.offset,
                    });
                }
            }

            boundaries.push(WorkBoundary {
                title: title.clone(),
                offset,
            });
        }

        Ok(Self::from_sorted(boundaries))
    }

    /// Wrap boundaries that are already strictly increasing.
    pub(crate) fn from_sorted(boundaries: Vec<WorkBoundary>) -> Self {
        crate::contracts::check_boundaries_increasing(&boundaries);
        let by_title = boundaries
            .iter()
            .enumerate()
            .map(|(i, b)| (b.title.clone(), i))
            .collect();
        Self {
            boundaries,
            by_title,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[WorkBoundary] {
        &self.boundaries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WorkBoundary> {
        self.boundaries.iter()
    }

    /// Position of `title` in canonical order.
    pub fn position(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Byte offset of the first work, where front matter ends.
    pub fn first_offset(&self) -> Option<usize> {
        self.boundaries.first().map(|b| b.offset)
    }

    /// Exclusive end of work `i`: the next boundary, or `None` for the last work.
    #[inline]
    pub fn upper_bound(&self, i: usize) -> Option<usize> {
        self.boundaries.get(i + 1).map(|b| b.offset)
    }

    /// Byte range owned by work `i`, with the last work ending at `corpus_len`.
    pub fn range(&self, i: usize, corpus_len: usize) -> Option<Range<usize>> {
        let start = self.boundaries.get(i)?.offset;
        let end = self.upper_bound(i).unwrap_or(corpus_len);
        Some(start..end)
    }

    /// Index of the work containing `offset`, `None` for front matter.
    ///
    /// Binary search over the sorted boundaries; a boundary offset belongs to
    /// the work it starts.
    pub fn work_at(&self, offset: usize) -> Option<usize> {
        let idx = self.boundaries.partition_point(|b| b.offset <= offset);
        idx.checked_sub(1)
    }
}
