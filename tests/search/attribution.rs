//! Matches land in the work whose heading precedes them.

use super::common::searcher_with;
use folio::testing::CorpusBuilder;
use folio::SearchConfig;

#[test]
fn table_of_contents_is_front_matter() {
    // "ghost" appears only in the preamble and in work two
    let builder = CorpusBuilder::new()
        .preamble("A ghost story collection. Contents")
        .work("ONE", "No spirits here.")
        .work("TWO", "The ghost walks.");
    let searcher = searcher_with(&builder, SearchConfig::default());

    let result = searcher.search("ghost").unwrap();
    assert_eq!(result.works.len(), 1);
    assert_eq!(result.works[0].title, "TWO");
    assert_eq!(result.works[0].snippets.len(), 1);
}

#[test]
fn works_without_matches_are_omitted() {
    let builder = CorpusBuilder::new()
        .work("ONE", "crown")
        .work("TWO", "sceptre")
        .work("THREE", "crown and sceptre");
    let searcher = searcher_with(&builder, SearchConfig::default());

    let titles: Vec<String> = searcher
        .search("crown")
        .unwrap()
        .works
        .into_iter()
        .map(|w| w.title)
        .collect();
    assert_eq!(titles, vec!["ONE", "THREE"]);
}

#[test]
fn results_follow_canonical_order() {
    let builder = CorpusBuilder::new()
        .work("ZETA", "bell")
        .work("ALPHA", "bell")
        .work("MU", "bell");
    let searcher = searcher_with(&builder, SearchConfig::default());
    let titles: Vec<String> = searcher
        .search("bell")
        .unwrap()
        .works
        .into_iter()
        .map(|w| w.title)
        .collect();
    assert_eq!(titles, vec!["ZETA", "ALPHA", "MU"]);
}

#[test]
fn matching_a_title_counts_the_heading() {
    // The heading is the first byte of the work, so it belongs to that work
    let builder = CorpusBuilder::new()
        .work("ONE", "first")
        .work("TWO", "second");
    let searcher = searcher_with(&builder, SearchConfig::default());

    let result = searcher.search("two").unwrap();
    assert_eq!(result.works.len(), 1);
    assert_eq!(result.works[0].title, "TWO");
    assert_eq!(
        result.works[0].snippets[0].offset,
        builder.heading_offset("TWO").unwrap()
    );
}

#[test]
fn last_work_runs_to_end_of_corpus() {
    let tail = format!("{} finale", "filler ".repeat(200));
    let builder = CorpusBuilder::new()
        .work("ONE", "overture")
        .work("TWO", &tail);
    let searcher = searcher_with(&builder, SearchConfig::default());

    let result = searcher.search("finale").unwrap();
    assert_eq!(result.works.len(), 1);
    assert_eq!(result.works[0].title, "TWO");
}

#[test]
fn snippet_offsets_fall_inside_their_work() {
    let builder = CorpusBuilder::new()
        .work("ONE", "the the the")
        .work("TWO", "the")
        .work("THREE", "other words then the end");
    let searcher = searcher_with(&builder, SearchConfig::default());
    let bounds = searcher.boundaries().to_vec();

    for work in searcher.search("the").unwrap().works {
        let i = bounds.iter().position(|b| b.title == work.title).unwrap();
        let start = bounds[i].offset;
        let end = bounds
            .get(i + 1)
            .map(|b| b.offset)
            .unwrap_or(searcher.corpus().len());
        for snippet in work.snippets {
            assert!(
                (start..end).contains(&snippet.offset),
                "{} at {} outside [{}, {})",
                work.title,
                snippet.offset,
                start,
                end
            );
        }
    }
}
