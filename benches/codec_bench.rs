//! Criterion benchmark untuk codec dan pose metadata
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use framemeta::frame::VideoFrame;
use framemeta::pose::CameraPose;
use framemeta::protocol::{self, Decoder, Encoder};

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for count in [8usize, 64, 1024, 16_384] {
        let values: Vec<f32> = (0..count).map(|i| i as f32 * 0.5).collect();
        let bytes = protocol::encode(&values);
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", count), &values, |b, values| {
            b.iter(|| black_box(protocol::encode(black_box(values.as_slice()))));
        });

        group.bench_with_input(BenchmarkId::new("encode_into", count), &values, |b, values| {
            let mut encoder = Encoder::new(bytes.len());
            b.iter(|| {
                let _ = black_box(encoder.encode(black_box(values.as_slice())));
            });
        });

        group.bench_with_input(BenchmarkId::new("decode", count), &bytes, |b, bytes| {
            b.iter(|| black_box(protocol::decode::<f32>(black_box(bytes))));
        });

        group.bench_with_input(BenchmarkId::new("decoder_iter", count), &bytes, |b, bytes| {
            b.iter(|| {
                let sum: f32 = Decoder::<f32>::new(black_box(bytes)).sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_pose(c: &mut Criterion) {
    let mut group = c.benchmark_group("pose");
    group.throughput(Throughput::Elements(1));

    let pose = CameraPose::new([0.25, -1.5, 3.0], [0.1, 0.2, -0.3]).with_projection(0.001, 1.0472);
    let bytes = pose.encode();

    group.bench_function("attach", |b| {
        let mut frame = VideoFrame::new(1280, 720, 0);
        let mut buf = [0u8; 32];
        b.iter(|| {
            let n = pose.encode_into(&mut buf).unwrap();
            frame.set_metadata(black_box(&buf[..n])).unwrap();
        });
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(CameraPose::decode(black_box(&bytes)).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_encode_decode, bench_pose);
criterion_main!(benches);
