use comparable_heap::BinaryHeap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::thread_rng;

fn push_pop_random(input: &[i32]) {
    let mut heap: BinaryHeap<i32> = BinaryHeap::new();
    for el in input {
        heap.push(*el);
    }
    while let Some(el) = heap.pop() {
        black_box(el);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut input: Vec<i32> = (0..100_000).collect();
    let mut rng = thread_rng();
    c.bench_function("binary_heap random push pop",
                     |b| b.iter(|| {
                         input.shuffle(&mut rng);
                         push_pop_random(&input);
                     }));
    c.bench_function("binary_heap init",
                     |b| b.iter(|| {
                         input.shuffle(&mut rng);
                         let heap = BinaryHeap::from(input.clone());
                         black_box(heap.len());
                     }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
