/// isovox - software isometric voxel-art rasterizer.
/// Projects a dense 3D grid of voxel ids into a 2D RGBA pixel buffer using a
/// fixed-angle projection and a per-id, per-face color palette.
pub mod error;
pub mod geometry;
pub mod palette;
pub mod scenes;
pub mod surface;

pub use error::SurfaceError;
pub use geometry::VoxelGeometry;
pub use palette::{VoxelFace, VoxelPalette, FACE_COUNT, PALETTE_ENTRIES};
pub use surface::VoxelSurface;
