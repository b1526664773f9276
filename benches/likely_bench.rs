// benches/likely_bench.rs
// Criterion benchmark for subtag inference and resolution:
//  - maximize/minimize over under- and fully-specified ids
//  - Accept-Language resolution against a realistic available set
//
// Run with `cargo bench --bench lsb`

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use locnorm::{Locale, accept_language, add_likely_subtags, minimize_subtags};

const IDS: &[&str] = &["zh", "zh_TW", "und_TW", "sr", "en_US_POSIX", "ru_UA", "xx_YY"];

fn bench_inference(c: &mut Criterion) {
    let locales: Vec<Locale> = IDS.iter().map(|id| Locale::new(id)).collect();

    let mut group = c.benchmark_group("likely_subtags");
    group.throughput(Throughput::Elements(locales.len() as u64));
    group.bench_function("maximize", |b| {
        b.iter(|| {
            for loc in &locales {
                black_box(add_likely_subtags(black_box(loc)));
            }
        });
    });
    group.bench_function("minimize", |b| {
        let maximal: Vec<Locale> = locales.iter().map(add_likely_subtags).collect();
        b.iter(|| {
            for loc in &maximal {
                black_box(minimize_subtags(black_box(loc)));
            }
        });
    });
    group.finish();
}

fn bench_accept(c: &mut Criterion) {
    let available: Vec<Locale> =
        ["en", "en_GB", "fr", "de", "ja", "zh_Hans", "zh_Hant", "pt_BR"]
            .iter()
            .map(|id| Locale::new(id))
            .collect();

    let mut group = c.benchmark_group("accept_language");
    group.bench_function("browser_header", |b| {
        b.iter(|| {
            black_box(accept_language(
                black_box("fr-CH, fr;q=0.9, en;q=0.8, de;q=0.7, *;q=0.5"),
                &available,
            ))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_inference, bench_accept);
criterion_main!(benches);
