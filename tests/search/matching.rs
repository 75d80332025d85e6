//! Query semantics: literal by default, regex on request.

use super::common::searcher_with;
use folio::testing::CorpusBuilder;
use folio::{Deadline, FolioError, QuerySyntax, SearchConfig};

fn punctuation_corpus() -> CorpusBuilder {
    CorpusBuilder::new()
        .work("ONE", "What? a (sic) note. Is it 1+1 or love.ly?")
        .work("TWO", "Sweet lov'd one, lovely and loved.")
}

#[test]
fn metacharacters_are_literal() {
    let searcher = searcher_with(&punctuation_corpus(), SearchConfig::default());

    let result = searcher.search("(sic)").unwrap();
    assert_eq!(result.len(), 1);
    assert!(result.works[0].snippets[0].text.contains("<mark>(sic)</mark>"));

    assert_eq!(searcher.search("1+1").unwrap().len(), 1);
    assert_eq!(searcher.search("love.ly").unwrap().len(), 1);
    assert!(searcher.search("lo.e").unwrap().is_empty());
}

#[test]
fn regex_is_refused_unless_enabled() {
    let searcher = searcher_with(&punctuation_corpus(), SearchConfig::default());
    assert!(matches!(
        searcher.query("lov.d", QuerySyntax::Regex),
        Err(FolioError::RegexDisabled)
    ));
}

#[test]
fn regex_matches_when_enabled() {
    let config = SearchConfig::default().with_regex(true);
    let searcher = searcher_with(&punctuation_corpus(), config);
    let query = searcher.query("lov.d", QuerySyntax::Regex).unwrap();
    let result = searcher.search_query(&query, Deadline::NONE).unwrap();

    // "lov'd" and "loved"
    assert_eq!(result.works.len(), 1);
    assert_eq!(result.works[0].title, "TWO");
    assert_eq!(result.works[0].snippets.len(), 2);
    assert!(result.works[0].snippets[0].text.contains("<mark>lov'd</mark>"));
    assert!(result.works[0].snippets[1].text.contains("<mark>loved</mark>"));
}

#[test]
fn malformed_regex_is_a_pattern_error() {
    let config = SearchConfig::default().with_regex(true);
    let searcher = searcher_with(&punctuation_corpus(), config);
    let err = searcher.query("lov(e", QuerySyntax::Regex).unwrap_err();
    assert!(matches!(err, FolioError::InvalidPattern { .. }));
    assert!(!err.is_fatal());
}

#[test]
fn regex_and_literal_agree_on_plain_words() {
    let config = SearchConfig::default().with_regex(true);
    let searcher = searcher_with(&punctuation_corpus(), config);

    let literal = searcher.search("love").unwrap();
    let regex = searcher
        .search_query(
            &searcher.query("love", QuerySyntax::Regex).unwrap(),
            Deadline::NONE,
        )
        .unwrap();
    assert_eq!(literal, regex);
}

#[test]
fn empty_query_is_rejected() {
    let searcher = searcher_with(&punctuation_corpus(), SearchConfig::default());
    assert!(matches!(searcher.search(""), Err(FolioError::EmptyQuery)));
}

#[test]
fn curly_apostrophes_match_literally() {
    let builder = CorpusBuilder::new().work("ONE", "The king’s men and the KING’S horses.");
    let searcher = searcher_with(&builder, SearchConfig::default());
    let result = searcher.search("king’s").unwrap();
    assert_eq!(result.len(), 2);
    assert!(result.works[0].snippets[1].text.contains("<mark>KING’S</mark>"));
}

#[test]
fn accented_capitals_fold_like_ascii() {
    let builder =
        CorpusBuilder::new().work("FABLES", "a café here and CAFÉ there, Æsop and æsop");
    let searcher = searcher_with(&builder, SearchConfig::default());

    for raw in ["café", "CAFÉ", "Café", "æsop", "Æsop", "ÆSOP"] {
        assert_eq!(searcher.search(raw).unwrap().len(), 2, "{:?}", raw);
    }

    // Highlights keep the corpus casing
    let snippets = &searcher.search("café").unwrap().works[0].snippets;
    assert!(snippets[0].text.contains("<mark>café</mark>"));
    assert!(snippets[1].text.contains("<mark>CAFÉ</mark>"));
}

#[test]
fn accented_literals_agree_with_regex() {
    let builder =
        CorpusBuilder::new().work("FABLES", "a café here and CAFÉ there, Æsop and æsop");
    let searcher = searcher_with(&builder, SearchConfig::default().with_regex(true));

    for raw in ["café", "Æsop"] {
        let literal = searcher.search(raw).unwrap();
        let query = searcher.query(raw, QuerySyntax::Regex).unwrap();
        let regex = searcher.search_query(&query, Deadline::NONE).unwrap();
        assert_eq!(literal, regex, "{:?}", raw);
    }
}
