use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use waymark::models::{Coordinates, Workout, WorkoutId};
use waymark::store::{MemorySlot, WorkoutStore};

fn seed_store(count: i64) -> WorkoutStore<MemorySlot> {
    let created_at = Utc.with_ymd_and_hms(2024, 6, 5, 10, 0, 0).unwrap();
    let mut store = WorkoutStore::new(MemorySlot::new());

    for i in 0..count {
        let coords = Coordinates::new(40.0 + (i as f64) * 0.001, -73.0);
        let workout = if i % 2 == 0 {
            Workout::new_running(WorkoutId::from_millis(i), coords, 5.0, 30.0, 150, created_at)
        } else {
            Workout::new_cycling(WorkoutId::from_millis(i), coords, 27.0, 95.0, 523.0, created_at)
        };
        store.append(workout.expect("valid seed workout"));
    }
    store
}

fn benchmark_persist_rehydrate(c: &mut Criterion) {
    let mut store = seed_store(1_000);
    let persisted = serde_json::to_string(store.workouts()).expect("serialize seed");

    let mut group = c.benchmark_group("store_round_trip");

    group.bench_function("persist_1000", |b| {
        b.iter(|| black_box(&mut store).persist())
    });

    group.bench_function("rehydrate_1000", |b| {
        b.iter_batched(
            || WorkoutStore::new(MemorySlot::with_value(persisted.clone())),
            |mut restored| {
                restored.rehydrate();
                black_box(restored.len())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, benchmark_persist_rehydrate);
criterion_main!(benches);
