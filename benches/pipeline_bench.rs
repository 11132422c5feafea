//! Benchmarks for the placement pipeline stages

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use placement_core::{BwSpike, SamplingClock, TimeInterval};
use placement_select::{AllocationSegmenter, IntervalIndex, TopKSpikeSelector};
use tier_placement::{PlacementConfig, PlacementPipeline};

/// Object counts with a ramp every 200 samples
fn generate_objects(size: usize) -> Vec<u64> {
    let mut level = 0u64;
    (0..size)
        .map(|i| {
            if i % 200 < 8 {
                level += 40;
            }
            level + (i as u64 * 7) % 3
        })
        .collect()
}

fn generate_bytes(size: usize) -> Vec<u64> {
    (0..size).map(|i| ((i * 31) % 4096) as u64).collect()
}

/// Fast tier dominant for 10 of every 25 samples
fn generate_bandwidth(size: usize) -> (Vec<f64>, Vec<f64>) {
    let fast = (0..size)
        .map(|i| if i % 25 < 10 { 40.0 } else { 1.0 })
        .collect();
    let slow = (0..size).map(|i| 1.0 + (i as f64 * 0.1).sin().abs()).collect();
    (fast, slow)
}

fn generate_intervals(count: usize) -> Vec<TimeInterval> {
    (0..count)
        .filter_map(|i| {
            let start = (i * 13 % 10_000) as f64 * 0.25;
            TimeInterval::new(start, start + ((i % 17) + 1) as f64 * 0.25).ok()
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = match PlacementPipeline::new(PlacementConfig::default()) {
        Ok(pipeline) => pipeline,
        Err(err) => panic!("default configuration rejected: {err}"),
    };

    for &size in &[1_000usize, 10_000, 100_000] {
        let objects = generate_objects(size);
        let bytes = generate_bytes(size);
        let (fast, slow) = generate_bandwidth(size / 4);

        group.bench_with_input(BenchmarkId::new("run", size), &size, |b, _| {
            b.iter(|| black_box(pipeline.run(&objects, &bytes, &fast, &slow)));
        });
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let clock = SamplingClock::new(0.25).unwrap_or_default();
    let bytes = generate_bytes(40_000);

    for &count in &[100usize, 1_000, 10_000] {
        let intervals = generate_intervals(count);
        let bw: Vec<BwSpike> = (0..count / 10)
            .map(|i| BwSpike::new(i as f64 * 25.0, i as f64 * 25.0 + 10.0))
            .collect();

        group.bench_with_input(BenchmarkId::new("index_build", count), &intervals, |b, intervals| {
            b.iter(|| black_box(IntervalIndex::build(intervals.iter().copied().enumerate().map(|(i, s)| (s, i)))));
        });

        let selector = TopKSpikeSelector::new(3, clock);
        group.bench_with_input(BenchmarkId::new("top_k", count), &intervals, |b, intervals| {
            b.iter(|| black_box(selector.select(intervals, &bytes, &bw)));
        });

        let selected = selector.select_intervals(&intervals, &bytes, &bw);
        let segmenter = AllocationSegmenter::new(clock);
        group.bench_with_input(BenchmarkId::new("segment", count), &selected, |b, selected| {
            b.iter(|| black_box(segmenter.segment(selected, &bytes)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_selection);
criterion_main!(benches);
