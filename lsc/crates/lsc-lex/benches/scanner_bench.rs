//! Scanner Benchmarks
//!
//! Measures operator scanning and keyword resolution throughput.
//! Run with: `cargo bench --package lsc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lsc_lex::{resolve_keyword, scan_operator, CharStream, TokenTables};

fn operator_count(source: &str) -> usize {
    let mut stream = CharStream::new(source);
    let mut count = 0;
    while scan_operator(&mut stream).is_some() {
        count += 1;
    }
    count
}

fn bench_scan_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    let source = "<<=>>=&&||==!=<=>=++--+=-=*=/=\\=%=&=|=^=(){}[];:,?";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_char", |b| {
        b.iter(|| operator_count(black_box("+")))
    });

    group.bench_function("mixed_run", |b| {
        b.iter(|| operator_count(black_box(source)))
    });

    group.bench_function("no_match", |b| {
        b.iter(|| operator_count(black_box("identifier")))
    });

    group.finish();
}

fn bench_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("keywords");

    let words = [
        "if", "else", "while", "continue", "counter", "fun", "funny", "string", "x",
    ];

    group.bench_function("resolve_mixed", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|word| resolve_keyword(black_box(word)).is_some())
                .count()
        })
    });

    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("token_tables_new", |b| b.iter(TokenTables::new));
}

criterion_group!(benches, bench_scan_operators, bench_keywords, bench_table_build);
criterion_main!(benches);
