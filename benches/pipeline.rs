//! Benchmarks for the cardface pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cardface::parser::{parse_card, tokenize};
use cardface::render::{BuiltinCatalog, Fonts, MonospaceMeasurer, TextLayout, RULES_TEXT_BOX};
use cardface::{classify, resolve_card};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cards")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

// -- Ingestion benchmarks --

fn bench_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingestion");

    let elves = load_fixture("CORE/LLANOWAR_ELVES.xml");
    let golem = load_fixture("CORE/ROT_GOLEM.xml");

    group.bench_function("parse_card_creature", |b| {
        b.iter(|| parse_card("LLANOWAR_ELVES", black_box(&elves), "CORE").unwrap())
    });

    group.bench_function("parse_card_hybrid_artifact", |b| {
        b.iter(|| parse_card("ROT_GOLEM", black_box(&golem), "CORE").unwrap())
    });

    group.finish();
}

// -- Identity and frame benchmarks --

fn bench_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");

    let costs = ["{G}", "{2}{B/G}{B/G}", "{X}{W/P}{U}{R}", ""];

    group.bench_function("tokenize", |b| {
        b.iter(|| {
            for cost in &costs {
                tokenize(black_box(cost)).unwrap();
            }
        })
    });

    group.bench_function("classify", |b| {
        b.iter(|| {
            for cost in &costs {
                classify(black_box(cost), None);
            }
        })
    });

    let golem = parse_card("ROT_GOLEM", &load_fixture("CORE/ROT_GOLEM.xml"), "CORE")
        .unwrap()
        .card;
    group.bench_function("resolve_frame", |b| b.iter(|| resolve_card(black_box(&golem))));

    group.finish();
}

// -- Layout benchmarks --

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    let fonts = Fonts::default();
    let measurer = MonospaceMeasurer::default();
    let layout = TextLayout::new(&fonts, &measurer, &BuiltinCatalog);

    let short = "{T}: Add {G}.";
    let long = "Flying, first strike\r\n{2}{W}, {T}: Tap target creature. |It's a trap!|\r\n\
                Whenever another creature enters the battlefield under your control, \
                you may pay {W/P}. If you do, put a +1/+1 counter on it.";

    group.bench_function("layout_short", |b| {
        b.iter(|| layout.layout(black_box(short), RULES_TEXT_BOX))
    });

    group.bench_function("layout_long_wrapping", |b| {
        b.iter(|| layout.layout(black_box(long), RULES_TEXT_BOX))
    });

    group.finish();
}

criterion_group!(benches, bench_ingestion, bench_identity, bench_layout);
criterion_main!(benches);
