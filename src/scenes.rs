/// Procedural scene builders for visual demos.
/// Each builder takes the target surface and voxel id explicitly; there is no
/// shared module state.
use glam::Vec3;
use noise::{NoiseFn, Perlin};

use crate::error::SurfaceError;
use crate::surface::VoxelSurface;

/// Fill the entire grid with one voxel id.
pub fn fill_box(surface: &mut VoxelSurface, value: u16) -> Result<(), SurfaceError> {
    let (w, h, d) = (surface.width(), surface.height(), surface.depth());
    surface.fill(value, 0, 0, 0, w, h, d)
}

/// Step pyramid: 1-high slabs, each layer inset by one cell on x/z and two
/// cells narrower in both footprint axes, until the footprint or the grid
/// height runs out.
pub fn fill_pyramid(surface: &mut VoxelSurface, value: u16) -> Result<(), SurfaceError> {
    let grid_height = surface.height();
    let mut w = surface.width();
    let mut d = surface.depth();
    let (mut x, mut y, mut z) = (0, 0, 0);

    while w > 0 && d > 0 && y < grid_height {
        surface.fill(value, x, y, z, w, 1, d)?;
        x += 1;
        y += 1;
        z += 1;
        w = w.saturating_sub(2);
        d = d.saturating_sub(2);
    }

    Ok(())
}

/// Axis-aligned ellipsoid inscribed in the grid: a cell is set when its
/// normalized squared distance from the grid center is at most 1.
pub fn fill_ellipsoid(surface: &mut VoxelSurface, value: u16) -> Result<(), SurfaceError> {
    let (w, h, d) = (surface.width(), surface.height(), surface.depth());
    let radii = Vec3::new(w as f32, h as f32, d as f32) * 0.5;
    let center = radii;

    for x in 0..w {
        for y in 0..h {
            for z in 0..d {
                let cell = Vec3::new(x as f32, y as f32, z as f32);
                if ((cell - center) / radii).length_squared() <= 1.0 {
                    surface.set_voxel(value, x, y, z)?;
                }
            }
        }
    }

    Ok(())
}

/// Rolling terrain: a Perlin heightmap turned into solid columns. The same
/// seed always produces the same scene.
pub fn fill_terrain(
    surface: &mut VoxelSurface,
    value: u16,
    seed: u32,
) -> Result<(), SurfaceError> {
    let perlin = Perlin::new(seed);
    let scale = 0.1;
    let grid_height = surface.height();

    for z in 0..surface.depth() {
        for x in 0..surface.width() {
            let noise_value = perlin.get([x as f64 * scale, z as f64 * scale]);
            // Map [-1, 1] onto [1, grid_height] column heights
            let column = 1 + ((noise_value + 1.0) * 0.5 * (grid_height - 1) as f64) as usize;
            let column = column.min(grid_height);
            surface.fill(value, x, 0, z, 1, column, 1)?;
        }
    }

    Ok(())
}
