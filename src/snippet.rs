// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet assembly: a context window around a match, with the match marked.
//!
//! ```text
//!            context              match             context
//!  ◀──────── ≤ N bytes ────────▶┌───────┐◀──────── ≤ N bytes ────────▶
//!  ...whose fortunes are but a  │ LOVE  │ of sighs, whose passion...
//!                          <mark>       </mark>
//! ```
//!
//! The span from the index may include widening characters (`\w?`), so the
//! query is re-located inside it first; only the query itself is marked.
//! Windows are clamped to the corpus and narrowed to char boundaries, so a
//! match near either end just gets a shorter window.

use crate::corpus::Corpus;
use crate::query::Query;
use crate::types::{MatchSpan, Snippet};
use serde::{Deserialize, Serialize};

/// Markers wrapped around the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub open: String,
    pub close: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

impl Highlight {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Remove the first pair of markers, recovering the plain window text.
    pub fn strip(&self, text: &str) -> String {
        let Some(open_at) = text.find(&self.open) else {
            return text.to_string();
        };
        let after_open = open_at + self.open.len();
        let Some(close_rel) = text[after_open..].find(&self.close) else {
            return text.to_string();
        };
        let close_at = after_open + close_rel;

        let mut plain = String::with_capacity(text.len());
        plain.push_str(&text[..open_at]);
        plain.push_str(&text[after_open..close_at]);
        plain.push_str(&text[close_at + self.close.len()..]);
        plain
    }
}

/// Build the snippet for one span.
///
/// Never reads outside the corpus: out-of-range spans are clamped, and the
/// context window shrinks near either end.
pub fn make_snippet(
    corpus: &Corpus,
    span: MatchSpan,
    query: &Query,
    context: usize,
    highlight: &Highlight,
) -> Snippet {
    let (span_start, span_end) = corpus.clamp_to_chars(span.start, span.end);

    let (match_start, match_end) = query
        .locate(&corpus.folded()[span_start..span_end])
        .map(|found| (span_start + found.start, span_start + found.end))
        .unwrap_or((span_start, span_end));

    let (window_start, window_end) = corpus.clamp_to_chars(
        match_start.saturating_sub(context),
        match_end.saturating_add(context),
    );

    let text = corpus.text();
    let mut rendered = String::with_capacity(
        window_end - window_start + highlight.open.len() + highlight.close.len(),
    );
    rendered.push_str(&text[window_start..match_start]);
    rendered.push_str(&highlight.open);
    rendered.push_str(&text[match_start..match_end]);
    rendered.push_str(&highlight.close);
    rendered.push_str(&text[match_end..window_end]);

    Snippet {
        offset: match_start,
        text: rendered,
    }
}
