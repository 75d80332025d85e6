// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling over arbitrary text.
//!
//! Arbitrary UTF-8 text and queries go through matching and snippet
//! rendering. Nothing may panic, spans must stay inside the corpus on char
//! boundaries, and malformed regex patterns must come back as errors.

#![no_main]

use arbitrary::Arbitrary;
use folio::{make_snippet, Corpus, Deadline, Highlight, Query, QuerySyntax, TextIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput<'a> {
    text: &'a str,
    query: &'a str,
    regex: bool,
    context: u8,
}

fuzz_target!(|input: SearchInput| {
    let syntax = if input.regex {
        QuerySyntax::Regex
    } else {
        QuerySyntax::Literal
    };
    // Empty queries and bad patterns are rejected, not panicked on
    let Ok(query) = Query::parse(input.query, syntax) else {
        return;
    };

    let corpus = Corpus::from_text(input.text);
    let index = TextIndex::build(&corpus);
    let Ok(spans) = index.find_all(&corpus, &query, Deadline::NONE) else {
        return;
    };

    let highlight = Highlight::default();
    let mut previous_end = 0;
    for span in spans {
        assert!(span.start < span.end && span.end <= corpus.len());
        assert!(span.start >= previous_end, "spans overlap");
        assert!(corpus.text().is_char_boundary(span.start));
        assert!(corpus.text().is_char_boundary(span.end));
        previous_end = span.end;

        let snippet = make_snippet(&corpus, span, &query, input.context as usize, &highlight);
        assert!(snippet.offset >= span.start && snippet.offset < span.end);
        assert!(snippet.text.contains(&highlight.open));
    }
});
