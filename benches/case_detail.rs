// benches/case_detail.rs
use criterion::{ black_box, criterion_group, criterion_main, Criterion };

use ecourts_scrape::model::CaseQuery;
use ecourts_scrape::specs::case_detail::parse_doc;

const PAGE: &str = include_str!("../tests/fixtures/case_detail.html");

fn bench_case_detail(c: &mut Criterion) {
    let query = CaseQuery::new("CS", "12", "2023");
    c.bench_function("case_detail_parse_doc", |b| {
        b.iter(|| parse_doc(black_box(PAGE), black_box(&query)))
    });
}

criterion_group!(benches, bench_case_detail);
criterion_main!(benches);
