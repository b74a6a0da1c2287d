//! Benchmarks for building, lowering and evaluating list initializers.
//!
//! ```bash
//! cargo bench --bench list_init_benchmarks
//! cargo bench --features profiling -- "implicit"
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use exprtree::modules::{INT_LIST, STRING_INT_DICTIONARY};
use exprtree::prelude::*;

const SIZES: [usize; 3] = [8, 64, 512];

fn ints(count: usize) -> Vec<Expr> {
    (0..count as i64).map(ConstantExpr::int).collect()
}

fn bench_build(c: &mut Criterion) {
    let engine = Engine::new().unwrap();
    let add = engine.registry().declared_methods(INT_LIST, "Add").pop().unwrap();
    let mut group = c.benchmark_group("build");

    for size in SIZES {
        let items = ints(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("implicit", size), &items, |b, items| {
            b.iter(|| {
                let new = engine.construct(INT_LIST).unwrap();
                black_box(ListInitExpr::new(engine.registry(), Some(new), Some(items.clone())).unwrap())
            })
        });

        group.bench_with_input(BenchmarkId::new("explicit", size), &items, |b, items| {
            b.iter(|| {
                let new = engine.construct(INT_LIST).unwrap();
                black_box(
                    ListInitExpr::with_method(engine.registry(), Some(new), Some(add.clone()), Some(items.clone()))
                        .unwrap(),
                )
            })
        });
    }
    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let engine = Engine::new().unwrap();
    let node = engine.list_init(INT_LIST, ints(64)).unwrap();

    c.bench_function("update/unchanged", |b| {
        b.iter(|| {
            black_box(
                node.update(
                    engine.registry(),
                    node.new_expression().clone(),
                    node.initializers().to_vec(),
                )
                .unwrap(),
            )
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in SIZES {
        let mut engine = Engine::new().unwrap();
        let node = Expr::ListInit(engine.list_init(INT_LIST, ints(size)).unwrap());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(BenchmarkId::new("list", size), |b| {
            b.iter(|| black_box(engine.evaluate(&node).unwrap()))
        });
    }

    let mut engine = Engine::new().unwrap();
    let groups = (0..64)
        .map(|i| vec![ConstantExpr::string(&format!("k{i}")), ConstantExpr::int(i)])
        .collect();
    let node = Expr::ListInit(engine.list_init_groups(STRING_INT_DICTIONARY, groups).unwrap());
    group.bench_function("dictionary/64", |b| {
        b.iter(|| black_box(engine.evaluate(&node).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_update, bench_evaluate);
criterion_main!(benches);
