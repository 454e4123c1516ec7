//! CRUD primitive benchmarks.
//!
//! Measures the five record primitives against a single table, plus
//! registry lookup. Setup allocation happens outside the timed loops.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench crud
//! cargo bench --bench crud -- "read"  # specific group
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabledb::prelude::*;

// =============================================================================
// Test Utilities
// =============================================================================

/// Build a table pre-populated with `count` records, returning the keys.
fn populated_table(count: usize) -> (Database, Vec<Key>) {
    let mut db = Database::new();
    let table = db.create_table::<u64>("bench").expect("fresh registry");
    let keys = (0..count as u64).map(|n| table.create(n).key).collect();
    (db, keys)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_create(c: &mut Criterion) {
    c.bench_function("create", |b| {
        let mut db = Database::new();
        let table = db.create_table::<u64>("bench").expect("fresh registry");
        let mut n = 0_u64;
        b.iter(|| {
            n += 1;
            black_box(table.create(black_box(n)))
        });
    });
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    for count in [64_usize, 4096] {
        let (db, keys) = populated_table(count);
        let table = db.using_table::<u64>("bench").expect("registered above");
        group.bench_with_input(BenchmarkId::from_parameter(count), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % keys.len();
                black_box(table.read(black_box(keys[i])))
            });
        });
    }
    group.finish();
}

fn bench_read_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_all");
    for count in [64_usize, 4096] {
        let (db, _keys) = populated_table(count);
        let table = db.using_table::<u64>("bench").expect("registered above");
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let sum: u64 = table.read_all().map(|entry| *entry.value).sum();
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_set(c: &mut Criterion) {
    c.bench_function("set_overwrite", |b| {
        let (mut db, keys) = populated_table(64);
        let table = db.using_table_mut::<u64>("bench").expect("registered above");
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(table.set(black_box(keys[i]), i as u64))
        });
    });
}

fn bench_update(c: &mut Criterion) {
    c.bench_function("update_replace", |b| {
        let (mut db, keys) = populated_table(64);
        let table = db.using_table_mut::<u64>("bench").expect("registered above");
        let mut i = 0;
        b.iter(|| {
            i = (i + 1) % keys.len();
            black_box(table.update(black_box(keys[i]), |n| {
                Update::Replace(n.copied().unwrap_or(0) + 1)
            }))
        });
    });
}

fn bench_delete_recreate(c: &mut Criterion) {
    c.bench_function("delete_then_create", |b| {
        let mut db = Database::new();
        let table = db.create_table::<u64>("bench").expect("fresh registry");
        let mut key = table.create(0).key;
        b.iter(|| {
            black_box(table.delete(key));
            key = table.create(black_box(1)).key;
        });
    });
}

fn bench_registry_lookup(c: &mut Criterion) {
    c.bench_function("using_table", |b| {
        let mut db = Database::new();
        db.create_table::<u64>("bench").expect("fresh registry");
        b.iter(|| black_box(db.using_table::<u64>(black_box("bench"))));
    });
}

criterion_group!(
    benches,
    bench_create,
    bench_read,
    bench_read_all,
    bench_set,
    bench_update,
    bench_delete_recreate,
    bench_registry_lookup,
);
criterion_main!(benches);
