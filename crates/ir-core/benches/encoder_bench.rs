//! Criterion benchmarks for the IR protocol encoders.
//!
//! Run with:
//! ```bash
//! cargo bench --package ir-core --bench encoder_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ir_core::{Payload, SircBits};

// ── Payload fixtures ──────────────────────────────────────────────────────────

fn fixtures() -> Vec<(&'static str, Payload)> {
    vec![
        ("nec", Payload::nec(0xE0E0, 0x0CF3)),
        ("sirc20", Payload::sirc(0x15, 0x1A2B, SircBits::Twenty)),
        ("rc5", Payload::rc5(0x10, 0x0C)),
        ("rc6", Payload::rc6(0, 0x80, 0x0C)),
        ("panasonic", Payload::panasonic(0x2002, 0x0100, 0x1AE0)),
        (
            "sharp_repeat",
            Payload::Sharp {
                address: 0x02,
                command: 0x10,
                repeat: true,
            },
        ),
    ]
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for (name, payload) in fixtures() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &payload, |b, p| {
            b.iter(|| black_box(p).encode())
        });
    }
    group.finish();
}

fn bench_catalog_encode(c: &mut Criterion) {
    let brands = ir_core::default_brands();
    c.bench_function("encode_full_catalog", |b| {
        b.iter(|| {
            for brand in &brands {
                for device in &brand.devices {
                    for command in &device.commands {
                        black_box(command.payload.encode());
                    }
                }
            }
        })
    });
}

criterion_group!(benches, bench_encode, bench_catalog_encode);
criterion_main!(benches);
