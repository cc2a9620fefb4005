//! Whitening throughput over in-memory streams.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use vnwhite::{TailPolicy, Whitener, WhitenerConfig};

fn bench_whitening(c: &mut Criterion) {
    // Deterministic pseudo-random input; every octet value appears.
    let input: Vec<u8> = (0..1_048_576u32)
        .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
        .collect();

    let mut group = c.benchmark_group("whitening");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("process_1mib", |b| {
        let mut engine = Whitener::new(WhitenerConfig {
            policy: TailPolicy::Discard,
        });
        let mut output = Vec::with_capacity(input.len() / 2);
        b.iter(|| {
            output.clear();
            let report = engine
                .process(black_box(&input[..]), &mut output)
                .expect("in-memory write cannot fail");
            black_box(report.output_octets)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_whitening);
criterion_main!(benches);
