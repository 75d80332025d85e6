// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Work attribution: which work does each match belong to?
//!
//! Match starts and work boundaries are both ascending, so one merge-style
//! sweep assigns every match in O(matches + works):
//!
//! ```text
//! matches:    m0   m1      m2 m3          m4
//!             │    │       │  │           │
//! ────────────┼────┼───[A──┼──┼───)[B─────┼────)[C──────────────────▶
//!          front matter    work A          work B       work C (open)
//!
//! result:  A: [m2, m3]   B: [m4]          (m0, m1 dropped, C omitted)
//! ```
//!
//! # Rules
//!
//! - Work `i` takes matches whose start lies in `[boundary[i], boundary[i + 1])`.
//!   A match exactly on a boundary belongs to the work that boundary starts.
//! - The last work has no upper bound.
//! - Matches before the first boundary (table of contents) are dropped.
//! - Works with no matches are omitted.
//!
//! The inner loop drains every match below the current work's upper bound
//! before moving to the next work, so the last accumulated group is always
//! flushed, including when matches run out exactly where a work begins.

use crate::boundaries::WorkBoundaries;
use crate::contracts::check_attribution;
use crate::deadline::Deadline;
use crate::error::Result;
use crate::types::MatchSpan;

/// Matches attributed to one work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    /// Index of the work in canonical order
    pub work: usize,
    /// Matches in corpus order, never empty
    pub spans: Vec<MatchSpan>,
}

/// Group sorted spans by enclosing work.
///
/// `spans` must be sorted by `start`. The result is in canonical work order.
pub fn attribute(
    spans: &[MatchSpan],
    boundaries: &WorkBoundaries,
    deadline: Deadline,
) -> Result<Vec<Attribution>> {
    let mut groups: Vec<Attribution> = Vec::new();
    let Some(first) = boundaries.first_offset() else {
        return Ok(groups);
    };

    let mut pending = spans.iter().copied().peekable();

    // Front matter
    while pending.next_if(|span| span.start < first).is_some() {}

    for work in 0..boundaries.len() {
        if pending.peek().is_none() {
            break;
        }
        deadline.check("attribution")?;

        let upper = boundaries.upper_bound(work);
        let mut hits: Vec<MatchSpan> = Vec::new();
        while let Some(span) = pending.next_if(|span| upper.map_or(true, |u| span.start < u)) {
            hits.push(span);
        }

        if !hits.is_empty() {
            check_attribution(boundaries.as_slice(), work, &hits);
            groups.push(Attribution { work, spans: hits });
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkBoundary;

    fn bounds(offsets: &[usize]) -> WorkBoundaries {
        WorkBoundaries::from_sorted(
            offsets
                .iter()
                .enumerate()
                .map(|(i, &offset)| WorkBoundary {
                    title: format!("W{}", i),
                    offset,
                })
                .collect(),
        )
    }

    fn spans(starts: &[usize]) -> Vec<MatchSpan> {
        starts.iter().map(|&s| MatchSpan::new(s, s + 1)).collect()
    }

    fn run(offsets: &[usize], starts: &[usize]) -> Vec<(usize, Vec<usize>)> {
        attribute(&spans(starts), &bounds(offsets), Deadline::NONE)
            .unwrap()
            .into_iter()
            .map(|a| (a.work, a.spans.iter().map(|s| s.start).collect()))
            .collect()
    }

    #[test]
    fn groups_by_half_open_ranges() {
        assert_eq!(
            run(&[10, 20, 30], &[12, 15, 25, 31]),
            vec![(0, vec![12, 15]), (1, vec![25]), (2, vec![31])]
        );
    }

    #[test]
    fn front_matter_is_dropped() {
        assert_eq!(run(&[10, 20], &[0, 3, 9, 11]), vec![(0, vec![11])]);
        assert!(run(&[10, 20], &[0, 9]).is_empty());
    }

    #[test]
    fn match_on_boundary_belongs_to_that_work() {
        assert_eq!(
            run(&[10, 20, 30], &[10, 19, 20, 30]),
            vec![(0, vec![10, 19]), (1, vec![20]), (2, vec![30])]
        );
    }

    #[test]
    fn works_without_matches_are_omitted() {
        assert_eq!(
            run(&[10, 20, 30, 40], &[11, 41]),
            vec![(0, vec![11]), (3, vec![41])]
        );
    }

    #[test]
    fn last_work_is_unbounded() {
        assert_eq!(
            run(&[10, 20], &[25, 1_000_000]),
            vec![(1, vec![25, 1_000_000])]
        );
    }

    #[test]
    fn final_match_exactly_at_last_boundary_is_flushed() {
        assert_eq!(
            run(&[10, 20, 30], &[15, 30]),
            vec![(0, vec![15]), (2, vec![30])]
        );
    }

    #[test]
    fn single_match_single_work() {
        assert_eq!(run(&[0], &[0]), vec![(0, vec![0])]);
    }

    #[test]
    fn empty_inputs() {
        assert!(run(&[10, 20], &[]).is_empty());
        assert!(attribute(&spans(&[1, 2]), &bounds(&[]), Deadline::NONE)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn every_match_after_first_boundary_is_attributed_once() {
        let offsets = [5, 17, 18, 40];
        let starts: Vec<usize> = (0..60).collect();
        let groups = run(&offsets, &starts);
        let total: usize = groups.iter().map(|(_, s)| s.len()).sum();
        assert_eq!(total, 60 - 5);
        // Work 1 is exactly one byte wide
        assert!(groups.contains(&(1, vec![17])));
    }

    #[test]
    fn expired_deadline_aborts() {
        use std::time::{Duration, Instant};
        let deadline = Deadline::at(Instant::now() - Duration::from_millis(1));
        let result = attribute(&spans(&[11]), &bounds(&[10]), deadline);
        assert!(result.is_err());
    }
}
