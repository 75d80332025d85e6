// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for work attribution.
//!
//! Every span at or after the first heading must land in exactly one work,
//! the one whose byte range contains its start. Spans in the table of
//! contents are dropped and empty works never appear.

#![no_main]

use arbitrary::Arbitrary;
use folio::testing::CorpusBuilder;
use folio::{attribute, Deadline, MatchSpan, WorkBoundaries};
use libfuzzer_sys::fuzz_target;

const TITLES: &[&str] = &["ALPHA", "BRAVO", "CHARLIE", "DELTA"];

#[derive(Debug, Arbitrary)]
struct AttributionInput {
    bodies: Vec<u8>,
    spans: Vec<(u16, u8)>,
}

fuzz_target!(|input: AttributionInput| {
    let works = input.bodies.len().clamp(1, TITLES.len());
    let builder = (0..works).fold(CorpusBuilder::new(), |builder, i| {
        let length = input.bodies.get(i).copied().unwrap_or(0) as usize;
        builder.work(TITLES[i], &"x".repeat(length))
    });
    let corpus = builder.corpus();
    let Ok(boundaries) = WorkBoundaries::build(&corpus, &builder.titles()) else {
        panic!("synthetic corpus must have valid boundaries");
    };

    // Sorted, disjoint spans clamped into the corpus
    let mut starts: Vec<usize> = input
        .spans
        .iter()
        .map(|&(start, _)| start as usize % corpus.len().max(1))
        .collect();
    starts.sort_unstable();
    starts.dedup();
    let spans: Vec<MatchSpan> = starts
        .windows(2)
        .map(|pair| MatchSpan::new(pair[0], pair[1]))
        .chain(starts.last().map(|&s| MatchSpan::new(s, s + 1)))
        .collect();

    let Ok(groups) = attribute(&spans, &boundaries, Deadline::NONE) else {
        panic!("attribution without a deadline cannot time out");
    };

    let first = boundaries.first_offset().unwrap_or(usize::MAX);
    let expected = spans.iter().filter(|s| s.start >= first).count();
    let attributed: usize = groups.iter().map(|g| g.spans.len()).sum();
    assert_eq!(attributed, expected, "every span after the TOC is attributed once");

    for pair in groups.windows(2) {
        assert!(pair[0].work < pair[1].work, "groups follow work order");
    }
    for group in &groups {
        assert!(!group.spans.is_empty());
        let Some(range) = boundaries.range(group.work, corpus.len()) else {
            panic!("group refers to unknown work {}", group.work);
        };
        for span in &group.spans {
            assert!(range.contains(&span.start), "{:?} outside {:?}", span, range);
        }
    }
});
