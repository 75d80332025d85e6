//! Paging over the flattened hit list.

use super::common::{rose_garden, searcher_with};
use folio::{paginate, Deadline, PageMode, Query, SearchConfig, SearchResult};

#[test]
fn offset_mode_slices_from_page_index() {
    let config = SearchConfig::default().with_page_mode(PageMode::Offset);
    let searcher = searcher_with(&rose_garden(), config);
    let query = Query::literal("rose").unwrap();

    let all = searcher.search_query(&query, Deadline::NONE).unwrap().hits();
    assert_eq!(all.len(), 23);

    let page = searcher.search_page(&query, 2, Deadline::NONE).unwrap();
    assert_eq!(page.result_count, 23);
    assert_eq!(page.result_limit, 10);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.results, all[2..12].to_vec());
}

#[test]
fn number_mode_walks_pages() {
    let searcher = searcher_with(&rose_garden(), SearchConfig::default());
    let query = Query::literal("rose").unwrap();
    let all = searcher.search_query(&query, Deadline::NONE).unwrap().hits();

    let mut seen = Vec::new();
    for page in 1..=3 {
        let p = searcher.search_page(&query, page, Deadline::NONE).unwrap();
        assert_eq!(p.page, page);
        seen.extend(p.results);
    }
    assert_eq!(seen, all);
    assert!(searcher
        .search_page(&query, 4, Deadline::NONE)
        .unwrap()
        .results
        .is_empty());
}

#[test]
fn page_boundaries_cross_works() {
    let searcher = searcher_with(&rose_garden(), SearchConfig::default());
    let query = Query::literal("rose").unwrap();

    // First work has 9 hits, so page 1 ends one hit into the second work
    let page = searcher.search_page(&query, 1, Deadline::NONE).unwrap();
    let groups = SearchResult::regroup(page.results);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "FIRST GARDEN");
    assert_eq!(groups[0].results.len(), 9);
    assert_eq!(groups[1].title, "SECOND GARDEN");
    assert_eq!(groups[1].results.len(), 1);
}

#[test]
fn page_size_is_configurable() {
    let config = SearchConfig::default().with_page_size(5);
    let searcher = searcher_with(&rose_garden(), config);
    let query = Query::literal("rose").unwrap();
    let page = searcher.search_page(&query, 5, Deadline::NONE).unwrap();
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.results.len(), 3);
}

#[test]
fn paginate_is_generic() {
    let items: Vec<u32> = (0..23).collect();
    let page = paginate(&items, 2, 10, PageMode::Offset);
    assert_eq!(page.results, (2..12).collect::<Vec<_>>());
}
