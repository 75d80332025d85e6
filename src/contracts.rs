// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and the attributor.
//!
//! These are `debug_assert!` checks: zero-cost in release builds, loud in
//! tests and debug runs. Each one guards an invariant a later stage depends on.
//!
//! | Contract                      | Guards                                   |
//! |-------------------------------|------------------------------------------|
//! | `check_boundaries_increasing` | forward-only sweep in the attributor     |
//! | `check_spans_sorted`          | attribution and pagination order         |
//! | `check_spans_in_bounds`       | snippet slicing                          |
//! | `check_attribution`           | every span sits inside its work's range  |

use crate::types::{MatchSpan, WorkBoundary};

/// Boundaries must be strictly increasing in title order.
#[inline]
pub fn check_boundaries_increasing(boundaries: &[WorkBoundary]) {
    for (i, pair) in boundaries.windows(2).enumerate() {
        debug_assert!(
            pair[0].offset < pair[1].offset,
            "Contract violation: boundary[{}] ({:?} @ {}) >= boundary[{}] ({:?} @ {})",
            i,
            pair[0].title,
            pair[0].offset,
            i + 1,
            pair[1].title,
            pair[1].offset
        );
    }
}

/// Spans must be sorted by start and must not overlap.
#[inline]
pub fn check_spans_sorted(spans: &[MatchSpan]) {
    for (i, pair) in spans.windows(2).enumerate() {
        debug_assert!(
            pair[0].end <= pair[1].start,
            "Contract violation: span[{}] {:?} overlaps or follows span[{}] {:?}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

/// Every span must be non-empty and end within the corpus.
#[inline]
pub fn check_spans_in_bounds(spans: &[MatchSpan], corpus_len: usize) {
    for (i, span) in spans.iter().enumerate() {
        debug_assert!(
            span.start < span.end && span.end <= corpus_len,
            "Contract violation: span[{}] {:?} outside corpus of {} bytes",
            i,
            span,
            corpus_len
        );
    }
}

/// Spans attributed to work `work` must start in `[boundary[work], boundary[work + 1])`.
#[inline]
pub fn check_attribution(boundaries: &[WorkBoundary], work: usize, spans: &[MatchSpan]) {
    debug_assert!(
        work < boundaries.len(),
        "Contract violation: work {} has no boundary",
        work
    );
    let Some(lower) = boundaries.get(work).map(|b| b.offset) else {
        return;
    };
    let upper = boundaries.get(work + 1).map(|b| b.offset);
    for span in spans {
        debug_assert!(
            span.start >= lower && upper.map_or(true, |u| span.start < u),
            "Contract violation: span {:?} attributed to work {} [{}, {:?})",
            span,
            work,
            lower,
            upper
        );
    }
}
