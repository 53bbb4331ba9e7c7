use criterion::{Criterion, black_box, criterion_group, criterion_main};
use keysync_tree::synchronize;
use serde_json::{Map, Value, json};

fn locale(sections: usize, keys: usize, prefix: &str) -> Map<String, Value> {
    let mut root = Map::new();
    for s in 0..sections {
        let mut section = Map::new();
        for k in 0..keys {
            section.insert(format!("key_{k}"), json!(format!("{prefix} {s}.{k}")));
        }
        root.insert(format!("section_{s}"), Value::Object(section));
    }
    root
}

fn sync_aligned_benchmark(c: &mut Criterion) {
    let primary = locale(50, 40, "en");
    let target = locale(50, 40, "fr");

    c.bench_function("synchronize (aligned)", |b| {
        b.iter(|| {
            let mut target = target.clone();
            synchronize(black_box(&primary), black_box(&mut target))
        })
    });
}

fn sync_divergent_benchmark(c: &mut Criterion) {
    let primary = locale(50, 40, "en");
    let target = locale(40, 60, "fr");

    c.bench_function("synchronize (divergent)", |b| {
        b.iter(|| {
            let mut target = target.clone();
            synchronize(black_box(&primary), black_box(&mut target))
        })
    });
}

criterion_group!(benches, sync_aligned_benchmark, sync_divergent_benchmark);
criterion_main!(benches);
