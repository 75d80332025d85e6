//! Full-work retrieval.

use super::common::{searcher_with, sonnets_corpus, two_work_searcher};
use folio::{FolioError, SearchConfig};

#[test]
fn sonnets_without_heading() {
    let searcher = searcher_with(&sonnets_corpus(), SearchConfig::default());
    let work = searcher.get_work("THE SONNETS").unwrap();

    assert_eq!(work.title, "THE SONNETS");
    assert!(work.contents.starts_with("1\r\n\r\nFrom fairest creatures"));
    assert!(work.contents.ends_with("might never die,"));
    assert!(!work.contents.contains("THE SONNETS"));
    assert!(!work.contents.contains("ALL’S WELL"));
}

#[test]
fn last_work_runs_to_end() {
    let searcher = searcher_with(&sonnets_corpus(), SearchConfig::default());
    let work = searcher.get_work("ALL’S WELL THAT ENDS WELL").unwrap();
    assert!(work.contents.starts_with("ACT I"));
    assert!(work.contents.ends_with("Countess’s palace."));
}

#[test]
fn unknown_title_is_work_not_found() {
    let searcher = two_work_searcher();
    let err = searcher.get_work("HAMLET").unwrap_err();
    assert!(matches!(err, FolioError::WorkNotFound(_)));
    assert_eq!(err.to_string(), "work not found");
    assert!(!err.is_client_error());
}

#[test]
fn titles_are_case_sensitive() {
    let searcher = two_work_searcher();
    assert!(searcher.get_work("title a").is_err());
    assert!(searcher.get_work("TITLE A").is_ok());
}

#[test]
fn every_work_round_trips_through_its_extent() {
    let searcher = searcher_with(&sonnets_corpus(), SearchConfig::default());
    for (title, offset, len) in searcher.work_extents() {
        let work = searcher.get_work(title).unwrap();
        let region = &searcher.corpus().text()[offset..offset + len];
        assert!(region.starts_with(title));
        assert!(region.contains(&work.contents));
    }
}
