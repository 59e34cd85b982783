//! Performance benchmarks for roster-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_engine::{view, EventTable, RecordingRenderer, Session, Store, UserData};

fn populated_store(size: u64) -> Store {
    let mut store = Store::new();
    for i in 0..size {
        let data = UserData::new(
            format!("Name{}", i),
            format!("Surname{}", i),
            format!("user{}@mail.com", i),
        );
        store.insert(data).unwrap();
    }
    store
}

fn bench_store_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_operations");

    group.bench_function("insert", |b| {
        let mut store = Store::new();
        b.iter(|| store.insert(black_box(UserData::new("Test", "User", "t@mail.com"))))
    });

    group.bench_function("get_record", |b| {
        let store = populated_store(1000);
        b.iter(|| store.get(black_box(500)))
    });

    group.bench_function("next_id_1000", |b| {
        let store = populated_store(1000);
        b.iter(|| store.next_id())
    });

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100u64, 1000, 10000] {
        let store = populated_store(size);

        group.bench_with_input(BenchmarkId::new("empty_search", size), &store, |b, store| {
            b.iter(|| view::filter(store.records(), black_box("")))
        });

        group.bench_with_input(BenchmarkId::new("substring", size), &store, |b, store| {
            b.iter(|| view::filter(store.records(), black_box("name99")))
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let table = EventTable::new();

    group.bench_function("search_submit_1000", |b| {
        let mut session = Session::new(populated_store(1000));
        let mut renderer = RecordingRenderer::new();
        b.iter(|| {
            renderer.clear_calls();
            table.dispatch(
                &mut session,
                &mut renderer,
                "search-submit",
                black_box(Some("surname5")),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_store_operations, bench_filter, bench_dispatch);
criterion_main!(benches);
