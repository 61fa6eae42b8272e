/// Voxel surface: a dense 3D grid of voxel ids plus the RGBA pixel buffer it
/// projects into.
///
/// The projection is a fixed isometric-style view. Each grid cell maps to one
/// screen rectangle (see `VoxelGeometry`); the rasterizer walks the grid
/// back-to-front and overdraws, so no depth buffer is needed. The pixel
/// buffer is sized from the extremal screen coordinates of the corner voxels,
/// giving a tight bound with no clipping.
use log::{debug, trace};

use crate::error::SurfaceError;
use crate::geometry::VoxelGeometry;
use crate::palette::{VoxelFace, VoxelPalette};

pub struct VoxelSurface {
    geometry: VoxelGeometry,
    width: usize,
    height: usize,
    depth: usize,
    /// Dense grid, z-major then y then x. 0 means empty/air.
    voxels: Box<[u16]>,
    pixel_width: usize,
    pixel_height: usize,
    /// RGBA8, 4 bytes per pixel, row-major.
    pixels: Vec<u8>,
    /// True whenever the grid has changed since the last `update`.
    dirty: bool,
}

impl VoxelSurface {
    /// Allocate a surface for a `width x height x depth` grid rendered with
    /// `geometry`. The grid starts empty and the surface dirty; both buffers
    /// are allocated once here and never resized.
    pub fn new(
        geometry: VoxelGeometry,
        width: usize,
        height: usize,
        depth: usize,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(SurfaceError::InvalidExtent {
                width,
                height,
                depth,
            });
        }

        let pixel_width =
            geometry.width + (geometry.width / 2) * ((width - 1) + (depth - 1));
        let pixel_height = geometry.height()
            + ((width - 1) + (depth - 1)) * geometry.top_height
            + (height - 1) * geometry.bottom_height;

        debug!(
            "voxel surface {}x{}x{} -> {}x{} pixel buffer",
            width, height, depth, pixel_width, pixel_height
        );

        Ok(Self {
            geometry,
            width,
            height,
            depth,
            voxels: vec![0u16; width * height * depth].into_boxed_slice(),
            pixel_width,
            pixel_height,
            pixels: vec![0u8; pixel_width * pixel_height * 4],
            dirty: true,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn geometry(&self) -> VoxelGeometry {
        self.geometry
    }

    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }

    #[inline]
    pub fn pixel_height(&self) -> usize {
        self.pixel_height
    }

    /// The rendered RGBA8 pixel buffer. Reflects the grid exactly only when
    /// `is_dirty` returns false.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Linear index of a grid cell (z-major, then y, then x).
    #[inline]
    fn voxel_index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.depth);
        z * self.width * self.height + y * self.width + x
    }

    #[inline]
    fn check_bounds(&self, x: usize, y: usize, z: usize) -> Result<(), SurfaceError> {
        if x < self.width && y < self.height && z < self.depth {
            Ok(())
        } else {
            Err(SurfaceError::OutOfRange {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }

    /// Byte offset of the top-left pixel of the rectangle cell `(x, y, z)`
    /// renders into.
    ///
    /// Horizontally the origin is centered when the grid footprint is square;
    /// for unequal width/depth the implicit centering breaks down and the
    /// origin anchors on `width - 1` instead, keeping the image tightly
    /// bounded. Vertically, cells farther along the `x + z` diagonal draw
    /// higher and higher `y` layers draw higher still.
    #[inline]
    fn pixel_offset(&self, x: usize, y: usize, z: usize) -> usize {
        let half = (self.geometry.width / 2) as isize;

        let px = if self.width != self.depth {
            (self.width as isize - 1) * half + (z as isize - x as isize) * half
        } else {
            (self.pixel_width / 2) as isize - half + (z as isize - x as isize) * half
        };
        debug_assert!(px >= 0 && (px as usize) + self.geometry.width <= self.pixel_width);

        let py = self.pixel_height
            - self.geometry.height()
            - (z + x) * self.geometry.top_height
            - y * self.geometry.bottom_height;

        (py * self.pixel_width + px as usize) * 4
    }

    /// Read one grid cell.
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> Result<u16, SurfaceError> {
        self.check_bounds(x, y, z)?;
        Ok(self.voxels[self.voxel_index(x, y, z)])
    }

    /// Assign `value` to one grid cell and mark the surface dirty.
    pub fn set_voxel(
        &mut self,
        value: u16,
        x: usize,
        y: usize,
        z: usize,
    ) -> Result<(), SurfaceError> {
        self.check_bounds(x, y, z)?;
        let index = self.voxel_index(x, y, z);
        self.voxels[index] = value;
        self.dirty = true;
        Ok(())
    }

    /// Assign `value` to every cell of the box `[x, x+w) x [y, y+h) x [z, z+d)`
    /// and mark the surface dirty. The whole box must lie inside the grid.
    pub fn fill(
        &mut self,
        value: u16,
        x: usize,
        y: usize,
        z: usize,
        w: usize,
        h: usize,
        d: usize,
    ) -> Result<(), SurfaceError> {
        if x + w > self.width || y + h > self.height || z + d > self.depth {
            return Err(SurfaceError::BoxOutOfRange {
                x,
                y,
                z,
                w,
                h,
                d,
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        if w == 0 || h == 0 || d == 0 {
            // Empty box: nothing to write, but the call still dirties
            self.dirty = true;
            return Ok(());
        }

        for k in z..z + d {
            for j in y..y + h {
                let row = self.voxel_index(x, j, k);
                self.voxels[row..row + w].fill(value);
            }
        }

        self.dirty = true;
        Ok(())
    }

    /// Reset every cell to empty and mark the surface dirty.
    pub fn clear(&mut self) {
        self.voxels.fill(0);
        self.dirty = true;
    }

    /// Rasterize the grid into the pixel buffer.
    ///
    /// No-op when the surface is clean; repeated calls without intervening
    /// mutation leave the buffer byte-identical at O(1) cost. Otherwise the
    /// buffer is fully recomputed: a background fill with the palette's
    /// voxel-0 `Top` color (alpha 0 when `transparent_background`, 255
    /// otherwise), then a painter's-algorithm traversal, z descending, y
    /// ascending, x descending, so nearer and higher rectangles overwrite
    /// farther ones.
    pub fn update(&mut self, palette: &VoxelPalette, transparent_background: bool) {
        if !self.dirty {
            return;
        }
        trace!(
            "rasterizing {}x{}x{} grid into {}x{} buffer",
            self.width,
            self.height,
            self.depth,
            self.pixel_width,
            self.pixel_height
        );

        let clear = palette.rgb(0, VoxelFace::Top);
        let clear_alpha = if transparent_background { 0x00 } else { 0xff };
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel[0] = clear[0];
            pixel[1] = clear[1];
            pixel[2] = clear[2];
            pixel[3] = clear_alpha;
        }

        let gw = self.geometry.width;
        let row_stride = self.pixel_width * 4;

        for z in (0..self.depth).rev() {
            for y in 0..self.height {
                for x in (0..self.width).rev() {
                    let voxel = self.voxels[self.voxel_index(x, y, z)];
                    if voxel == 0 {
                        continue;
                    }

                    // Top-face visibility depends only on the (x+1, z+1)
                    // diagonal neighbor in this projection; vertical stacking
                    // never occludes a top.
                    let occluded = x < self.width - 1
                        && z < self.depth - 1
                        && self.voxels[self.voxel_index(x + 1, y, z + 1)] != 0;
                    let top_face = if occluded {
                        VoxelFace::Top
                    } else {
                        VoxelFace::Top2
                    };

                    let top = palette.rgb(voxel, top_face);
                    let left = palette.rgb(voxel, VoxelFace::Left);
                    let right = palette.rgb(voxel, VoxelFace::Right);

                    let mut offset = self.pixel_offset(x, y, z);

                    for _ in 0..self.geometry.top_height {
                        let row = &mut self.pixels[offset..offset + gw * 4];
                        for pixel in row.chunks_exact_mut(4) {
                            pixel[0] = top[0];
                            pixel[1] = top[1];
                            pixel[2] = top[2];
                            pixel[3] = 0xff;
                        }
                        offset += row_stride;
                    }

                    for _ in 0..self.geometry.bottom_height {
                        let row = &mut self.pixels[offset..offset + gw * 4];
                        let (left_half, right_half) = row.split_at_mut(gw / 2 * 4);
                        for pixel in left_half.chunks_exact_mut(4) {
                            pixel[0] = left[0];
                            pixel[1] = left[1];
                            pixel[2] = left[2];
                            pixel[3] = 0xff;
                        }
                        for pixel in right_half.chunks_exact_mut(4) {
                            pixel[0] = right[0];
                            pixel[1] = right[1];
                            pixel[2] = right[2];
                            pixel[3] = 0xff;
                        }
                        offset += row_stride;
                    }
                }
            }
        }

        self.dirty = false;
    }
}
