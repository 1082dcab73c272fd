use bstree::{Order, OrderedMap};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 2] = [100, 10_000];

fn rng() -> StdRng { StdRng::seed_from_u64(0x5eed) }

fn random_map(n: usize, rng: &mut StdRng) -> (OrderedMap<usize, usize>, Vec<usize>) {
    let mut map = OrderedMap::new();
    let keys: Vec<usize> = (0..n).map(|_| rng.gen::<usize>() % n).collect();
    for &k in &keys { let _ = map.insert(k, k); }
    (map, keys)
}

fn insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let (mut map, _) = random_map(n, &mut rng);

            b.iter(|| {
                let k = rng.gen::<usize>() % n;
                if map.insert(k, k).is_err() { black_box(map.remove(&k).ok()); }
            });
        });

        // Every other key is present, so each measured insert lands on a leaf.
        group.bench_with_input(BenchmarkId::new("seq", n), &n, |b, &n| {
            let mut map = OrderedMap::new();
            let mut keys: Vec<usize> = (0..n).map(|i| i * 2).collect();
            keys.shuffle(&mut rng());
            for &k in &keys { map.insert(k, k).unwrap(); }

            let mut i = 1;
            b.iter(|| {
                if map.insert(i, i).is_err() { black_box(map.remove(&i).ok()); }
                i = (i + 2) % (2 * n);
            });
        });
    }

    group.finish();
}

fn find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("rand", n), &n, |b, &n| {
            let mut rng = rng();
            let (map, mut keys) = random_map(n, &mut rng);
            keys.shuffle(&mut rng);

            let mut i = 0;
            b.iter(|| {
                black_box(map.find(&keys[i]));
                i = (i + 1) % n;
            });
        });
    }

    group.finish();
}

fn traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let (map, _) = random_map(10_000, &mut rng());

    for &order in &[Order::Pre, Order::In, Order::Post, Order::Level] {
        group.bench_with_input(BenchmarkId::new(format!("{:?}", order), map.len()), &order,
                               |b, &order| b.iter(|| {
            for entry in map.traverse(order) { black_box(entry); }
        }));
    }

    group.bench_function("height", |b| b.iter(|| black_box(map.height())));
    group.bench_function("clone", |b| b.iter(|| black_box(map.clone())));

    group.finish();
}

criterion_group!(benches, insert, find, traverse);
criterion_main!(benches);
