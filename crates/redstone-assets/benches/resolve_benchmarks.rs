//! Model loading and resolution benchmarks.
//!
//! Measures the cost of reading a parent chain from disk and flattening it,
//! which the designer does once per palette entry at startup.
//!
//! Run with: `cargo bench --bench resolve_benchmarks`

use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use redstone_assets::prelude::*;

fn fixture_pack() -> AssetPack {
    AssetPack::at_path(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pack"))
}

fn bench_load_and_resolve(c: &mut Criterion) {
    let pack = fixture_pack();
    let mut group = c.benchmark_group("load_and_resolve");
    for name in ["iron_block", "sandstone", "repeater_4tick_on_locked", "redstone_dust_dot"] {
        let location: ResourceLocation = name.parse().expect("valid location");
        group.bench_with_input(BenchmarkId::from_parameter(name), &location, |b, loc| {
            b.iter(|| {
                let chain = pack.load_model_recursive(black_box(loc)).expect("model loads");
                black_box(ModelResolver::resolve(chain.iter()))
            });
        });
    }
    group.finish();
}

fn bench_resolve_only(c: &mut Criterion) {
    let pack = fixture_pack();
    let location: ResourceLocation = "sandstone".parse().expect("valid location");
    let chain = pack.load_model_recursive(&location).expect("model loads");
    c.bench_function("resolve_in_memory_chain", |b| {
        b.iter(|| {
            let model = ModelResolver::resolve(black_box(&chain).iter());
            black_box(model.face_textures().expect("textures resolve"))
        });
    });
}

criterion_group!(benches, bench_load_and_resolve, bench_resolve_only);
criterion_main!(benches);
