//! Benchmarks for tensor conversion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use nnue_convert::nnue::writer::write_i16_le;
use nnue_convert::nnue::{quantize_matrix, quantize_vector, Architecture};

fn feature_weights(arch: &Architecture) -> Vec<Vec<f64>> {
    (0..arch.hidden)
        .map(|n| {
            (0..arch.features)
                .map(|f| ((n * 31 + f * 17) % 255) as f64 / 255.0 - 0.5)
                .collect()
        })
        .collect()
}

fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantize");
    let arch = Architecture::default();
    let weights = feature_weights(&arch);
    let length = arch.hidden * arch.features;

    for transpose in [false, true] {
        let stride = if transpose { arch.hidden } else { arch.features };
        group.bench_with_input(
            BenchmarkId::new("feature_weights", if transpose { "transposed" } else { "row_major" }),
            &transpose,
            |b, &transpose| {
                b.iter(|| quantize_matrix(black_box(&weights), stride, length, arch.qa, transpose))
            },
        );
    }

    let bias: Vec<f64> = (0..arch.hidden).map(|n| n as f64 / 1024.0).collect();
    group.bench_function("feature_bias", |b| {
        b.iter(|| quantize_vector(black_box(&bias), arch.qa))
    });

    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let arch = Architecture::default();
    let values: Vec<i16> = (0..arch.hidden * arch.features)
        .map(|i| (i % 511) as i16 - 255)
        .collect();

    c.bench_function("write_feature_weights", |b| {
        let mut buf = Vec::with_capacity(values.len() * 2);
        b.iter(|| {
            buf.clear();
            write_i16_le(&mut buf, black_box(&values)).unwrap();
        })
    });
}

criterion_group!(benches, bench_quantize, bench_write);
criterion_main!(benches);
