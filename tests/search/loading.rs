//! Loading a corpus from disk, and the ways it can fail.

use super::common::{two_work_corpus, write_temp};
use folio::{load_titles, FolioError, SearchConfig, Searcher};

#[test]
fn loads_from_file() {
    let builder = two_work_corpus();
    let file = write_temp(&builder.text());
    let searcher = Searcher::load(file.path(), &builder.titles(), SearchConfig::default()).unwrap();

    assert_eq!(searcher.corpus().len(), builder.text().len());
    assert_eq!(searcher.search("love").unwrap().works.len(), 2);
}

#[test]
fn missing_file_is_fatal_io_error() {
    let err = Searcher::load(
        "/definitely/not/here/completeworks.txt",
        &["A".to_string()],
        SearchConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FolioError::Io { .. }));
    assert!(err.is_fatal());
}

#[test]
fn title_missing_from_corpus_is_fatal() {
    let builder = two_work_corpus();
    let file = write_temp(&builder.text());
    let mut titles = builder.titles();
    titles.push("TITLE C".to_string());

    let err = Searcher::load(file.path(), &titles, SearchConfig::default()).unwrap_err();
    assert!(
        matches!(err, FolioError::TitleNotFound { ref title, occurrences: 0 } if title == "TITLE C")
    );
    assert!(err.is_fatal());
}

#[test]
fn title_listed_only_once_is_fatal() {
    let text = "Contents\nONE\nTWO\n\nONE\n\nbody\n";
    let file = write_temp(text);
    let titles = vec!["ONE".to_string(), "TWO".to_string()];
    let err = Searcher::load(file.path(), &titles, SearchConfig::default()).unwrap_err();
    assert!(matches!(err, FolioError::TitleNotFound { occurrences: 1, .. }));
}

#[test]
fn out_of_order_titles_are_fatal() {
    let builder = two_work_corpus();
    let file = write_temp(&builder.text());
    let titles = vec!["TITLE B".to_string(), "TITLE A".to_string()];
    let err = Searcher::load(file.path(), &titles, SearchConfig::default()).unwrap_err();
    assert!(matches!(err, FolioError::BoundaryOrder { .. }));
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let mut bytes = two_work_corpus().text().into_bytes();
    bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, &bytes).unwrap();

    let searcher = Searcher::load(
        file.path(),
        &two_work_corpus().titles(),
        SearchConfig::default(),
    )
    .unwrap();
    assert!(searcher.corpus().text().contains('\u{FFFD}'));
    assert_eq!(searcher.search("lovely").unwrap().len(), 1);
}

#[test]
fn title_file_round_trip() {
    let file = write_temp("# one per line\nTITLE A\n\n  TITLE B  \n");
    assert_eq!(load_titles(file.path()).unwrap(), vec!["TITLE A", "TITLE B"]);
}
