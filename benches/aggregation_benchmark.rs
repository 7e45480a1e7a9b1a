use brc_processor::processors::{aggregate_chunk, partition, ParallelProcessor};
use brc_processor::writers::render_report;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Create a synthetic measurement region for benchmarking
fn create_measurements(station_count: usize, readings_per_station: usize) -> Vec<u8> {
    let mut data = Vec::new();

    for reading in 0..readings_per_station {
        for station_id in 0..station_count {
            let tenths = ((station_id * 37 + reading * 13) % 1999) as i32 - 999;
            let sign = if tenths < 0 { "-" } else { "" };
            let magnitude = tenths.unsigned_abs();
            data.extend_from_slice(
                format!(
                    "Station_{};{}{}.{}\n",
                    station_id,
                    sign,
                    magnitude / 10,
                    magnitude % 10
                )
                .as_bytes(),
            );
        }
    }

    data
}

fn benchmark_chunk_aggregation(c: &mut Criterion) {
    let data = create_measurements(100, 1_000);

    c.bench_function("aggregate_chunk_100k_records", |b| {
        b.iter(|| aggregate_chunk(black_box(&data), 0..data.len()).unwrap())
    });
}

fn benchmark_partitioning(c: &mut Criterion) {
    let data = create_measurements(100, 1_000);

    c.bench_function("partition_100k_records", |b| {
        b.iter(|| partition(black_box(&data), black_box(16)))
    });
}

fn benchmark_worker_scaling(c: &mut Criterion) {
    let data = create_measurements(400, 500);
    let mut group = c.benchmark_group("worker_scaling");

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                let processor = ParallelProcessor::new(workers);
                b.iter(|| {
                    let summary = processor.summarize_bytes(black_box(&data), None).unwrap();
                    render_report(&summary)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_chunk_aggregation,
    benchmark_partitioning,
    benchmark_worker_scaling
);
criterion_main!(benches);
