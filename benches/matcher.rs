use std::hint::black_box;

use accept_language::{match_languages, LanguageMatcher};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const HEADER: &str = "en-US, fr-CA, fr-FR, de-DE, es-ES, it-IT, ja-JP, ko-KR, zh-CN, zh-TW";
const SUPPORTED: [&str; 4] = ["en-US", "fr-FR", "ja-JP", "zh-CN"];

/// Header tokens processed per iteration
fn header_tokens() -> u64 {
    HEADER.split(',').count() as u64
}

/// One-shot matching: indexes the supported list on every call
fn bench_match_languages(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");
    group.throughput(Throughput::Elements(header_tokens()));

    group.bench_function("match_languages", |b| {
        b.iter(|| match_languages(black_box(HEADER), black_box(&SUPPORTED)));
    });

    group.finish();
}

/// Prebuilt matcher: indexes once, matches many headers
fn bench_prebuilt_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("prebuilt");
    group.throughput(Throughput::Elements(header_tokens()));

    let matcher = LanguageMatcher::new(SUPPORTED);
    group.bench_function("language_matcher", |b| {
        b.iter(|| matcher.matches(black_box(HEADER)).len());
    });

    group.finish();
}

criterion_group!(benches, bench_match_languages, bench_prebuilt_matcher);
criterion_main!(benches);
