/// Error taxonomy for surface construction and grid access.
/// All variants indicate caller misuse, not recoverable runtime states;
/// operations fail fast instead of corrupting the pixel buffer.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Geometry dimensions that the rasterizer cannot split or stack.
    /// The width must be even because the bottom rows are divided exactly
    /// in half for the left and right faces.
    #[error("invalid voxel geometry: width {width} (must be even and non-zero), top height {top_height}, bottom height {bottom_height} (must be non-zero)")]
    InvalidGeometry {
        width: usize,
        top_height: usize,
        bottom_height: usize,
    },

    /// Grid dimensions must all be non-zero; the pixel buffer size is
    /// derived from `extent - 1` terms and a zero axis has no cells to draw.
    #[error("invalid grid extent: {width}x{height}x{depth} (all axes must be non-zero)")]
    InvalidExtent {
        width: usize,
        height: usize,
        depth: usize,
    },

    /// Coordinates outside the grid.
    #[error("coordinates ({x}, {y}, {z}) out of range for grid {width}x{height}x{depth}")]
    OutOfRange {
        x: usize,
        y: usize,
        z: usize,
        width: usize,
        height: usize,
        depth: usize,
    },

    /// A fill box that extends past the grid, reported as origin + extents.
    #[error("fill box at ({x}, {y}, {z}) with extent {w}x{h}x{d} exceeds grid {width}x{height}x{depth}")]
    BoxOutOfRange {
        x: usize,
        y: usize,
        z: usize,
        w: usize,
        h: usize,
        d: usize,
        width: usize,
        height: usize,
        depth: usize,
    },
}
