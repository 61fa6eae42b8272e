/// Benchmark suite for the rasterization pass and grid mutation hot paths.
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isovox::{scenes, VoxelGeometry, VoxelPalette, VoxelSurface};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn sand_palette() -> VoxelPalette {
    let mut palette = VoxelPalette::new();
    palette.set_entry_shaded(0, 0x000000);
    palette.set_entry_shaded(1, 0xedc9af);
    palette
}

fn bench_update_solid_box(c: &mut Criterion) {
    c.bench_function("update_solid_box_32", |b| {
        let geometry = VoxelGeometry::new(8, 2, 4).unwrap();
        let palette = sand_palette();
        let mut surface = VoxelSurface::new(geometry, 32, 32, 32).unwrap();
        scenes::fill_box(&mut surface, 1).unwrap();

        b.iter(|| {
            // Re-dirty so the pass actually runs; the refill is cheap next
            // to the rasterization itself.
            scenes::fill_box(&mut surface, 1).unwrap();
            surface.update(black_box(&palette), false);
        });
    });
}

fn bench_update_sparse_scatter(c: &mut Criterion) {
    c.bench_function("update_sparse_scatter_32", |b| {
        let geometry = VoxelGeometry::new(8, 2, 4).unwrap();
        let palette = sand_palette();
        let mut surface = VoxelSurface::new(geometry, 32, 32, 32).unwrap();

        // Deterministic scatter at ~5% occupancy
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut cells = Vec::new();
        for _ in 0..1600 {
            cells.push((
                rng.gen_range(0..32),
                rng.gen_range(0..32),
                rng.gen_range(0..32),
            ));
        }

        b.iter(|| {
            surface.clear();
            for &(x, y, z) in &cells {
                surface.set_voxel(1, x, y, z).unwrap();
            }
            surface.update(black_box(&palette), true);
        });
    });
}

fn bench_clean_update_is_free(c: &mut Criterion) {
    c.bench_function("update_clean_noop", |b| {
        let geometry = VoxelGeometry::new(8, 2, 4).unwrap();
        let palette = sand_palette();
        let mut surface = VoxelSurface::new(geometry, 32, 32, 32).unwrap();
        scenes::fill_box(&mut surface, 1).unwrap();
        surface.update(&palette, false);

        b.iter(|| {
            surface.update(black_box(&palette), false);
        });
    });
}

fn bench_fill(c: &mut Criterion) {
    c.bench_function("fill_box_64", |b| {
        let geometry = VoxelGeometry::new(8, 2, 4).unwrap();
        let mut surface = VoxelSurface::new(geometry, 64, 64, 64).unwrap();

        b.iter(|| {
            surface.fill(black_box(1), 0, 0, 0, 64, 64, 64).unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_update_solid_box,
    bench_update_sparse_scatter,
    bench_clean_update_is_free,
    bench_fill
);
criterion_main!(benches);
