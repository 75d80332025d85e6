//! Snippet windows and highlighting through the public searcher.

use super::common::searcher_with;
use folio::testing::CorpusBuilder;
use folio::{Highlight, SearchConfig};

#[test]
fn context_window_is_configurable() {
    let body = format!("{}needle{}", "x".repeat(100), "y".repeat(100));
    let builder = CorpusBuilder::new().work("ONE", &body);
    let searcher = searcher_with(&builder, SearchConfig::default().with_context_bytes(5));

    let result = searcher.search("needle").unwrap();
    let text = &result.works[0].snippets[0].text;
    // The match is widened by one x and one y, but only "needle" is marked
    assert_eq!(text, "xxxxx<mark>needle</mark>yyyyy");
}

#[test]
fn custom_markers() {
    let builder = CorpusBuilder::new().work("ONE", "once more unto the breach");
    let config = SearchConfig::default().with_highlight(Highlight::new("[[", "]]"));
    let searcher = searcher_with(&builder, config);

    let text = &searcher.search("breach").unwrap().works[0].snippets[0].text;
    assert!(text.ends_with("the [[breach]]\n"));
}

#[test]
fn snippet_at_end_of_corpus_is_clamped() {
    let builder = CorpusBuilder::new().work("ONE", "the last word");
    let searcher = searcher_with(&builder, SearchConfig::default());
    let corpus_len = searcher.corpus().len();

    let result = searcher.search("word").unwrap();
    let snippet = &result.works[0].snippets[0];
    assert!(snippet.offset + 4 <= corpus_len);
    assert!(snippet.text.ends_with("<mark>word</mark>\n"));
}

#[test]
fn multibyte_context_is_never_split() {
    let body = format!("{}love{}", "é".repeat(10), "’".repeat(10));
    let builder = CorpusBuilder::new().work("ONE", &body);
    for context in 0..8 {
        let searcher = searcher_with(&builder, SearchConfig::default().with_context_bytes(context));
        let result = searcher.search("love").unwrap();
        let text = &result.works[0].snippets[0].text;
        assert!(text.contains("<mark>love</mark>"), "context {}: {:?}", context, text);
        let plain = Highlight::default().strip(text);
        assert!(plain.len() <= 4 + 2 * context);
    }
}

#[test]
fn one_snippet_per_match() {
    let builder = CorpusBuilder::new().work("ONE", "rose, rose, rose");
    let searcher = searcher_with(&builder, SearchConfig::default());
    let result = searcher.search("rose").unwrap();
    let offsets: Vec<usize> = result.works[0].snippets.iter().map(|s| s.offset).collect();
    assert_eq!(offsets.len(), 3);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_regex_matches_are_not_highlighted() {
    let builder = CorpusBuilder::new().work("ONE", "banana bread, then toast");
    let searcher = searcher_with(&builder, SearchConfig::default().with_regex(true));
    let highlight = Highlight::default();

    for pattern in ["a*", "x?a*"] {
        let query = searcher.query(pattern, folio::QuerySyntax::Regex).unwrap();
        let result = searcher.search_query(&query, folio::Deadline::NONE).unwrap();
        assert!(!result.is_empty(), "{:?}", pattern);
        for snippet in &result.works[0].snippets {
            let start = snippet.text.find(&highlight.open).unwrap() + highlight.open.len();
            let end = snippet.text.find(&highlight.close).unwrap();
            let marked = &snippet.text[start..end];
            assert!(marked.starts_with('a'), "{:?}: {:?}", pattern, snippet.text);
        }
    }
}
