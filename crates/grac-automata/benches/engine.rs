//! Benchmarks for the automaton engine.
//!
//! Run with: cargo bench -p grac-automata

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grac_automata::{AutomatonEngine, EngineConfig, RuleTable};

fn engine(size: usize, num_val: u8, display_lines: usize) -> AutomatonEngine {
    let config = EngineConfig::default()
        .with_size_bounds(3, 4096)
        .with_alphabet_bounds(2, 16)
        .with_display_lines(display_lines);
    let mut engine = AutomatonEngine::new(config).expect("valid bench config");
    engine.set_grid_size(size, true);
    engine.set_alphabet_size(num_val, true);
    let rules = RuleTable::from_fn(num_val, |l, m, r| l.wrapping_mul(3) ^ m ^ r.wrapping_add(1));
    for (i, &v) in rules.entries().iter().enumerate() {
        engine.set_rule(i, v);
    }
    for i in (0..size).step_by(3) {
        engine.set_initial_cell(i, 1);
    }
    engine
}

fn bench_advance(c: &mut Criterion) {
    let mut engine = engine(40, 5, 10);
    engine.initialize();

    c.bench_function("advance_40_cells", |b| {
        b.iter(|| {
            engine.advance();
            black_box(engine.grid());
        });
    });
}

fn bench_advance_wide(c: &mut Criterion) {
    let mut engine = engine(4096, 5, 64);
    engine.initialize();

    c.bench_function("advance_4096_cells", |b| {
        b.iter(|| {
            engine.advance();
            black_box(engine.grid());
        });
    });
}

fn bench_initialize(c: &mut Criterion) {
    let mut engine = engine(40, 5, 64);

    c.bench_function("initialize_40x63_score", |b| {
        b.iter(|| {
            engine.initialize();
            black_box(engine.score());
        });
    });
}

fn bench_migration(c: &mut Criterion) {
    let source = RuleTable::from_fn(16, |l, m, r| (l + m + r) % 16);

    c.bench_function("migrate_16_to_5", |b| {
        b.iter(|| black_box(RuleTable::migrated(black_box(&source), 5)));
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_wide,
    bench_initialize,
    bench_migration
);
criterion_main!(benches);
