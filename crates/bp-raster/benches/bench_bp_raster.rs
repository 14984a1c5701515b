use bp_core::{BitRaster, Pixel, RegionSpec};
use bp_raster::compile_region;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Raster with runs of duplicate rows so the history table gets real
/// hits, the way toolbar art repeats.
fn generate_raster(width: u32, height: u32, duplicate_run: u32) -> BitRaster {
    let mut rng = StdRng::seed_from_u64(7);
    let mut raster = BitRaster::new(width, height);
    let mut template: Vec<bool> = Vec::new();
    for y in 0..height {
        if y % duplicate_run == 0 {
            template = (0..width).map(|_| rng.gen_bool(0.5)).collect();
        }
        for x in 0..width {
            if template[x as usize] {
                raster.set(x, y, Pixel::White);
            }
        }
    }
    raster
}

fn bench_compile_region(c: &mut Criterion) {
    let raster = generate_raster(480, 320, 4);

    let tools = RegionSpec { name: "Tools".into(), x: 10, y: 29, w: 51, h: 197 };
    c.bench_function("compile_region_51x197", |b| {
        b.iter(|| black_box(compile_region(black_box(&raster), &tools).unwrap()))
    });

    let fills = RegionSpec { name: "Fills".into(), x: 72, y: 279, w: 401, h: 33 };
    c.bench_function("compile_region_401x33", |b| {
        b.iter(|| black_box(compile_region(black_box(&raster), &fills).unwrap()))
    });

    let icon = RegionSpec { name: "Icon".into(), x: 0, y: 0, w: 0, h: 0 };
    c.bench_function("compile_image_480x320", |b| {
        b.iter(|| black_box(compile_region(black_box(&raster), &icon).unwrap()))
    });
}

criterion_group!(benches, bench_compile_region);
criterion_main!(benches);
