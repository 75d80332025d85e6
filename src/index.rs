// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text search index: a suffix array over the folded corpus.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_SORTED**: `folded[sa[i]..] <= folded[sa[i + 1]..]`
//! 2. **SUFFIX_ARRAY_COMPLETE**: every byte offset of the corpus appears once
//! 3. **SPANS_DISJOINT**: `find_all` returns spans sorted by start with
//!    `spans[i].end <= spans[i + 1].start`
//!
//! # Literal matching
//!
//! All suffixes that start with the needle form one contiguous run of the
//! suffix array, found with two binary searches. Their offsets, sorted, are
//! the raw occurrences. The widening sweep then turns occurrences into spans
//! with the leftmost-first semantics of `\w?needle\w?`:
//!
//! ```text
//! corpus:  ...  t h e   k i n g d o m  ...
//! needle:             k i n g
//! span:          [  ' 'k i n g d)         leading ' ' is not a word char,
//!                      └────────┘         trailing 'd' is: span = "kingd"
//! ```
//!
//! Scanning from the end of the previous span, the leftmost start is either
//! one byte before the next occurrence (when that byte is a word character
//! the scan may still use) or the occurrence itself. A span never starts
//! before the previous one ends.

use crate::contracts::{check_spans_in_bounds, check_spans_sorted};
use crate::corpus::Corpus;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::query::{is_word_byte, Query};
use crate::sais::sais;
use crate::types::MatchSpan;
use std::time::Instant;
use tracing::info;

/// How many spans to produce between deadline checks.
const DEADLINE_STRIDE: usize = 4096;

/// Suffix array over `Corpus::folded()`.
#[derive(Debug, Clone)]
pub struct TextIndex {
    suffix_array: Vec<usize>,
}

impl TextIndex {
    /// Build the suffix array in O(n) with SA-IS.
    pub fn build(corpus: &Corpus) -> Self {
        let started = Instant::now();
        let suffix_array = sais(corpus.folded().as_bytes());
        info!(
            suffixes = suffix_array.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built suffix array"
        );
        Self { suffix_array }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Check the sortedness invariant. O(n log n)-ish; intended for tests.
    pub fn is_sorted(&self, corpus: &Corpus) -> bool {
        let bytes = corpus.folded().as_bytes();
        self.suffix_array
            .windows(2)
            .all(|pair| bytes[pair[0]..] <= bytes[pair[1]..])
    }

    /// Start offsets of every occurrence of `needle` in the folded corpus, ascending.
    ///
    /// Occurrences may overlap (`"aa"` in `"aaa"` occurs at 0 and 1).
    pub fn occurrences(&self, corpus: &Corpus, needle: &[u8]) -> Vec<usize> {
        if needle.is_empty() {
            return Vec::new();
        }
        let bytes = corpus.folded().as_bytes();
        let sa = &self.suffix_array;

        // Binary search: first suffix >= needle
        let lo = sa.partition_point(|&pos| &bytes[pos..] < needle);
        // Suffixes starting with needle are contiguous from lo
        let run = sa[lo..].partition_point(|&pos| bytes[pos..].starts_with(needle));

        let mut found: Vec<usize> = sa[lo..lo + run].to_vec();
        found.sort_unstable();
        found
    }

    /// All spans matched by `query`, sorted and disjoint.
    pub fn find_all(
        &self,
        corpus: &Corpus,
        query: &Query,
        deadline: Deadline,
    ) -> Result<Vec<MatchSpan>> {
        let spans = match (query.needle(), query.widened()) {
            (Some(needle), _) => {
                let occurrences = self.occurrences(corpus, needle.as_bytes());
                deadline.check("matching")?;
                widen_occurrences(corpus.folded().as_bytes(), &occurrences, needle.len(), deadline)?
            }
            (None, Some(widened)) => {
                let mut spans = Vec::new();
                for m in widened.find_iter(corpus.folded()) {
                    // A pattern that matched only empty text has nothing to highlight
                    if query.locate(m.as_str()).is_none() {
                        continue;
                    }
                    spans.push(MatchSpan::new(m.start(), m.end()));
                    if spans.len() % DEADLINE_STRIDE == 0 {
                        deadline.check("matching")?;
                    }
                }
                spans
            }
            (None, None) => Vec::new(),
        };

        check_spans_sorted(&spans);
        check_spans_in_bounds(&spans, corpus.len());
        Ok(spans)
    }
}

/// Turn sorted literal occurrences into `\w?needle\w?` spans.
///
/// `occurrences` must be ascending. See the module docs for the scan rules.
pub(crate) fn widen_occurrences(
    text: &[u8],
    occurrences: &[usize],
    needle_len: usize,
    deadline: Deadline,
) -> Result<Vec<MatchSpan>> {
    let mut spans: Vec<MatchSpan> = Vec::new();
    let mut cursor = 0usize;

    for (i, &at) in occurrences.iter().enumerate() {
        if at < cursor {
            continue;
        }

        let (start, literal) = if at > cursor && is_word_byte(text[at - 1]) {
            // The optional leading \w takes the byte before the occurrence
            (at - 1, at)
        } else if is_word_byte(text[at]) && occurrences.get(i + 1) == Some(&(at + 1)) {
            // Greedy leading \w consumes text[at] when the needle also fits one byte later
            (at, at + 1)
        } else {
            (at, at)
        };

        let mut end = literal + needle_len;
        if end < text.len() && is_word_byte(text[end]) {
            end += 1;
        }

        spans.push(MatchSpan::new(start, end));
        cursor = end;

        if spans.len() % DEADLINE_STRIDE == 0 {
            deadline.check("matching")?;
        }
    }

    Ok(spans)
}
