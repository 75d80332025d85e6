//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::testing::CorpusBuilder;
use folio::{SearchConfig, Searcher};
use std::io::Write;
use tempfile::NamedTempFile;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{sonnets_corpus, two_work_corpus};

// ============================================================================
// SEARCHERS
// ============================================================================

/// Searcher over the two-work "love"/"lovely" corpus with default settings.
pub fn two_work_searcher() -> Searcher {
    searcher_with(&two_work_corpus(), SearchConfig::default())
}

pub fn searcher_with(builder: &CorpusBuilder, config: SearchConfig) -> Searcher {
    builder
        .searcher(config)
        .expect("synthetic corpus should always index")
}

/// Three works with enough matches to paginate: 23 occurrences of "rose".
pub fn rose_garden() -> CorpusBuilder {
    CorpusBuilder::new()
        .work("FIRST GARDEN", &"a rose here. ".repeat(9))
        .work("SECOND GARDEN", &"the rose there. ".repeat(7))
        .work("THIRD GARDEN", &"no rose anywhere. ".repeat(7))
}

// ============================================================================
// FILES ON DISK
// ============================================================================

/// Write `text` to a temporary file that lives as long as the handle.
pub fn write_temp(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(text.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Every snippet contains exactly one highlighted region and it matches `query`.
pub fn assert_highlights(searcher: &Searcher, query: &str) {
    let highlight = &searcher.config().highlight;
    for work in &searcher.search(query).unwrap().works {
        for snippet in &work.snippets {
            let open = snippet
                .text
                .find(&highlight.open)
                .unwrap_or_else(|| panic!("no open marker in {:?}", snippet.text));
            let rest = &snippet.text[open + highlight.open.len()..];
            let close = rest
                .find(&highlight.close)
                .unwrap_or_else(|| panic!("no close marker in {:?}", snippet.text));
            assert!(
                rest[..close].eq_ignore_ascii_case(query),
                "highlighted {:?}, expected {:?}",
                &rest[..close],
                query
            );
        }
    }
}
