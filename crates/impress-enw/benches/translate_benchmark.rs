//! Parsing and translation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use impress_enw::{
    convert_all_to_source, convert_all_to_target, export, format_entries, parse, OutputOptions,
};
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

fn generate_many_entries(count: usize) -> String {
    let mut result = String::new();
    for i in 0..count {
        result.push_str(&format!(
            r#"%0 Journal Article
%A Author, {i}
%A Second, Author
%T Title of Paper Number {i}
%J Journal {journal}
%D 2024
%8 2024-03-{day:02}
%V {volume}
%P 1-10
%@ 1234-567X
%K keyword {i}
%R 10.1234/test.{i}

"#,
            journal = i % 10,
            day = i % 28 + 1,
            volume = i % 50
        ));
    }
    result
}

fn bench_parse_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("enw_parse_many");

    for count in [10, 100, 1000] {
        let content = generate_many_entries(count);
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &content,
            |b, content| b.iter(|| parse(black_box(content))),
        );
    }
    group.finish();
}

fn bench_parse_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("enw_parse_fixtures");

    if let Ok(sample) = std::fs::read_to_string(fixture_path("enw/single_author.enw")) {
        group.bench_function("single_author_fixture", |b| {
            b.iter(|| parse(black_box(&sample)))
        });
    }

    group.finish();
}

fn bench_translate(c: &mut Criterion) {
    let bags = parse(&generate_many_entries(100));
    let records = convert_all_to_target(&bags);

    let mut group = c.benchmark_group("enw_translate_100_entries");
    group.bench_function("to_target", |b| {
        b.iter(|| convert_all_to_target(black_box(&bags)))
    });
    group.bench_function("to_source", |b| {
        b.iter(|| convert_all_to_source(black_box(&records)))
    });
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let bags = parse(&generate_many_entries(100));

    c.bench_function("enw_format_100_entries", |b| {
        b.iter(|| format_entries(black_box(&bags), "\n"))
    });
}

fn bench_export(c: &mut Criterion) {
    let records = convert_all_to_target(&parse(&generate_many_entries(100)));
    let options = OutputOptions::default();

    c.bench_function("enw_export_100_entries", |b| {
        b.iter(|| export(black_box(&records), &options))
    });
}

criterion_group!(
    benches,
    bench_parse_many,
    bench_parse_fixtures,
    bench_translate,
    bench_format,
    bench_export
);
criterion_main!(benches);
