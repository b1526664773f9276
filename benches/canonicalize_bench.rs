// benches/canonicalize_bench.rs
// Criterion benchmark for the parse/canonicalize hot path:
//  - Per-shape groups (plain, legacy alias, keyword-heavy, POSIX)
//  - Throughput in identifiers, not bytes
//
// Run with `cargo bench --bench cb`

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use locnorm::locale;
use locnorm::{Locale, canonicalize};

// A mix modeled on what request logs actually carry: mostly well-formed
// ids, a tail of legacy spellings and keyword forms.
const CORPUS: &[&str] = &[
    "en_US",
    "de_DE",
    "zh_Hant_TW",
    "sr_Latn_RS_REVISED",
    "en-us",
    "EN_us_posix",
    "heb_IL",
    "es_ZAR",
    "ca_ES_PREEURO",
    "zh_CHS",
    "de__PHONEBOOK",
    "C",
    "en_US.utf8@EURO",
    "en_US@currency=USD;collation=phonebook",
    "zh@collation=pinyin,currency=CNY",
];

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    group.throughput(Throughput::Elements(CORPUS.len() as u64));
    group.bench_function("mixed_corpus", |b| {
        b.iter(|| {
            for id in CORPUS {
                black_box(canonicalize(black_box(id)));
            }
        });
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.throughput(Throughput::Elements(CORPUS.len() as u64));
    group.bench_function("name", |b| {
        b.iter(|| {
            for id in CORPUS {
                black_box(locale::name(black_box(id)));
            }
        });
    });
    group.bench_function("field_extraction", |b| {
        let loc = Locale::new("sr_Latn_RS_REVISED@currency=RSD");
        b.iter(|| {
            black_box(loc.language());
            black_box(loc.script());
            black_box(loc.country());
            black_box(loc.variant());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_canonicalize, bench_normalize);
criterion_main!(benches);
