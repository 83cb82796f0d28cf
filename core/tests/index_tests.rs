use storefind::{Record, SearchIndex, ValidationError};

fn record(title: &str, excerpt: &str, url: &str) -> Record {
    Record {
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        categories: Default::default(),
        tags: Default::default(),
        url: url.to_string(),
        teaser: String::new(),
    }
}

fn video_store() -> Vec<Record> {
    vec![
        record(
            "Flight test: follow solution",
            "Recorded test flight. This video tests the follow control solution.",
            "/videos/flight-test-follow",
        ),
        record(
            "Test yaw controller",
            "Recorded simulation. Test tuned yaw PID controller.",
            "/videos/test-yaw-controller",
        ),
    ]
}

#[test]
fn empty_query_returns_nothing() {
    let index = SearchIndex::build(video_store()).unwrap();
    assert!(index.query("").is_empty());
    assert!(index.query("   ,;!  ").is_empty());
}

#[test]
fn any_indexed_token_is_queryable() {
    let index = SearchIndex::build(video_store()).unwrap();
    // From a title and from an excerpt.
    let from_title = index.query("follow");
    assert!(from_title.iter().any(|r| r.url == "/videos/flight-test-follow"));
    let from_excerpt = index.query("simulation");
    assert!(from_excerpt.iter().any(|r| r.url == "/videos/test-yaw-controller"));
}

#[test]
fn unknown_token_excludes_records() {
    let index = SearchIndex::build(video_store()).unwrap();
    assert!(index.query("quadcopter").is_empty());
}

#[test]
fn query_is_case_and_punctuation_insensitive() {
    let index = SearchIndex::build(video_store()).unwrap();
    let hits = index.query("YAW!");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "/videos/test-yaw-controller");
}

#[test]
fn single_token_query_returns_only_matching_record() {
    let index = SearchIndex::build(video_store()).unwrap();
    let hits = index.query("yaw");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].url, "/videos/test-yaw-controller");
}

#[test]
fn ties_keep_store_order() {
    let index = SearchIndex::build(video_store()).unwrap();
    // "test" appears in both records; both match exactly one token.
    let hits = index.query_scored("test");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].record.url, "/videos/flight-test-follow");
    assert_eq!(hits[1].record.url, "/videos/test-yaw-controller");
    assert_eq!(hits[0].score, hits[1].score);
}

#[test]
fn more_distinct_matches_rank_higher() {
    let index = SearchIndex::build(video_store()).unwrap();
    // Record 1 matches "yaw" and "test"; record 0 matches only "test".
    let hits = index.query_scored("yaw test");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].record.url, "/videos/test-yaw-controller");
    assert_eq!(hits[0].score, 2);
    assert_eq!(hits[1].score, 1);
}

#[test]
fn repeated_query_tokens_count_once() {
    let index = SearchIndex::build(video_store()).unwrap();
    let hits = index.query_scored("test test test");
    assert_eq!(hits[0].score, 1);
}

#[test]
fn duplicate_url_is_rejected() {
    let records = vec![
        record("A", "first", "/videos/dup"),
        record("B", "second", "/videos/dup"),
    ];
    let err = SearchIndex::build(records).unwrap_err();
    assert_eq!(
        err,
        ValidationError::DuplicateUrl {
            url: "/videos/dup".to_string()
        }
    );
}

#[test]
fn empty_url_is_rejected() {
    let records = vec![record("A", "first", "/videos/a"), record("B", "second", "")];
    let err = SearchIndex::build(records).unwrap_err();
    assert_eq!(err, ValidationError::MissingUrl { index: 1 });
}

#[test]
fn empty_store_builds_an_empty_index() {
    let index = SearchIndex::build(Vec::new()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.num_tokens(), 0);
    assert!(index.query("anything").is_empty());
}
