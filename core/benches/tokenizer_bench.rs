use criterion::{criterion_group, criterion_main, Criterion};
use storefind::tokenizer::tokenize;
use storefind::{Record, SearchIndex};

fn bench_tokenize(c: &mut Criterion) {
    let text = include_str!("../README.md");
    c.bench_function("tokenize_readme", |b| b.iter(|| tokenize(text)));
}

fn bench_query(c: &mut Criterion) {
    let records: Vec<Record> = (0..500)
        .map(|i| Record {
            title: format!("Flight test number {i}"),
            excerpt: "Recorded test flight of the follow control solution.".to_string(),
            categories: Default::default(),
            tags: Default::default(),
            url: format!("/videos/flight-{i}"),
            teaser: String::new(),
        })
        .collect();
    let index = SearchIndex::build(records).unwrap();
    c.bench_function("query_500_records", |b| {
        b.iter(|| index.query_scored("flight follow controller"))
    });
}

criterion_group!(benches, bench_tokenize, bench_query);
criterion_main!(benches);
