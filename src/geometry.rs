/// Screen-space footprint of a single rendered voxel.
///
/// A rendered voxel is a rectangle split into a top and a bottom
/// sub-rectangle sharing one width:
///
/// ```text
/// *-----------*
/// |   top     |
/// <-- width -->
/// |  bottom   |
/// *-----------*
/// ```
///
/// The top rows represent the upward (Y+) face of the cube; the bottom rows
/// are split in half for the two side faces. Varying the width and heights
/// changes the apparent viewing angle of the fixed projection.
use crate::error::SurfaceError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VoxelGeometry {
    pub width: usize,
    pub top_height: usize,
    pub bottom_height: usize,
}

impl VoxelGeometry {
    /// Create a geometry descriptor.
    ///
    /// The width must be even and non-zero: the rasterizer splits the bottom
    /// rows exactly in half for the left/right faces. Both heights must be
    /// non-zero.
    pub fn new(
        width: usize,
        top_height: usize,
        bottom_height: usize,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || width % 2 != 0 || top_height == 0 || bottom_height == 0 {
            return Err(SurfaceError::InvalidGeometry {
                width,
                top_height,
                bottom_height,
            });
        }
        Ok(Self {
            width,
            top_height,
            bottom_height,
        })
    }

    /// Total rectangle height in pixels. Always derived, never stored.
    #[inline]
    pub const fn height(&self) -> usize {
        self.top_height + self.bottom_height
    }
}
