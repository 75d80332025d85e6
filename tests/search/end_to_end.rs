//! Whole-pipeline checks on small synthetic corpora.

use super::common::{assert_highlights, two_work_searcher};
use folio::Highlight;

#[test]
fn love_matches_both_works_once() {
    let searcher = two_work_searcher();
    let result = searcher.search("love").unwrap();

    assert_eq!(result.works.len(), 2);
    assert_eq!(result.works[0].title, "TITLE A");
    assert_eq!(result.works[1].title, "TITLE B");
    assert_eq!(result.works[0].snippets.len(), 1);
    assert_eq!(result.works[1].snippets.len(), 1);

    assert!(result.works[0].snippets[0]
        .text
        .contains("My <mark>love</mark> is as a fever"));
    assert!(result.works[1].snippets[0]
        .text
        .contains("A <mark>love</mark>ly day"));
}

#[test]
fn case_insensitive_both_ways() {
    let searcher = two_work_searcher();
    let lower = searcher.search("love").unwrap();
    let upper = searcher.search("LOVE").unwrap();
    let mixed = searcher.search("LoVe").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn highlighted_text_is_the_query() {
    let searcher = two_work_searcher();
    assert_highlights(&searcher, "love");
    assert_highlights(&searcher, "day");
    assert_highlights(&searcher, "a");
}

#[test]
fn absent_query_is_empty_not_error() {
    let searcher = two_work_searcher();
    let result = searcher.search("zebra").unwrap();
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
}

#[test]
fn repeated_searches_are_identical() {
    let searcher = two_work_searcher();
    let first = searcher.search("a").unwrap();
    for _ in 0..5 {
        assert_eq!(searcher.search("a").unwrap(), first);
    }
}

#[test]
fn markers_round_trip_to_window_text() {
    let searcher = two_work_searcher();
    let highlight = Highlight::default();
    for work in searcher.search("love").unwrap().works {
        for snippet in work.snippets {
            let plain = highlight.strip(&snippet.text);
            assert!(plain.to_ascii_lowercase().contains("love"));
            assert!(searcher.corpus().text().contains(&plain));
        }
    }
}
