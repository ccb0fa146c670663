/// Alignment Benchmarks
///
/// Measures matrix construction plus traceback on event-name sequences of
/// growing length, for near-identical and fully divergent trace pairs.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tracealign::alignment::{align, distance};

const EVENTS: [&str; 8] = [
    "nav", "load", "click", "scroll", "input", "submit", "focus", "blur",
];

/// Synthetic record trace cycling through common event names
fn record_trace(len: usize) -> Vec<String> {
    (0..len).map(|i| EVENTS[i % EVENTS.len()].to_string()).collect()
}

/// Replay trace with every tenth event perturbed
fn replay_trace(len: usize) -> Vec<String> {
    (0..len)
        .map(|i| {
            if i % 10 == 0 {
                format!("{}_retry", EVENTS[i % EVENTS.len()])
            } else {
                EVENTS[i % EVENTS.len()].to_string()
            }
        })
        .collect()
}

fn bench_align_near_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_near_identical");

    for len in [100usize, 500, 1_000] {
        let record = record_trace(len);
        let replay = replay_trace(len);
        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| align(black_box(&record), black_box(&replay), None))
        });
    }

    group.finish();
}

fn bench_distance_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_only");

    for len in [100usize, 500, 1_000] {
        let record = record_trace(len);
        let replay: Vec<String> = record_trace(len).into_iter().rev().collect();
        group.throughput(Throughput::Elements((len * len) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| distance(black_box(&record), black_box(&replay), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_align_near_identical, bench_distance_only);
criterion_main!(benches);
