/// Tests for grid mutation, bounds checking, and the dirty flag.
use isovox::{SurfaceError, VoxelGeometry, VoxelSurface};

fn surface(w: usize, h: usize, d: usize) -> VoxelSurface {
    let geometry = VoxelGeometry::new(4, 1, 2).unwrap();
    VoxelSurface::new(geometry, w, h, d).unwrap()
}

#[test]
fn new_surface_is_empty_and_dirty() {
    let s = surface(3, 2, 4);
    assert!(s.is_dirty());
    for z in 0..4 {
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(s.voxel(x, y, z).unwrap(), 0);
            }
        }
    }
}

#[test]
fn zero_extent_is_rejected() {
    let geometry = VoxelGeometry::new(4, 1, 2).unwrap();
    assert!(matches!(
        VoxelSurface::new(geometry, 0, 2, 4),
        Err(SurfaceError::InvalidExtent { .. })
    ));
    assert!(VoxelSurface::new(geometry, 3, 0, 4).is_err());
    assert!(VoxelSurface::new(geometry, 3, 2, 0).is_err());
}

#[test]
fn set_voxel_and_readback() {
    let mut s = surface(3, 2, 4);
    s.set_voxel(42, 1, 1, 2).unwrap();
    assert_eq!(s.voxel(1, 1, 2).unwrap(), 42);
    assert_eq!(s.voxel(1, 0, 2).unwrap(), 0);
}

#[test]
fn out_of_range_access_fails() {
    let mut s = surface(3, 2, 4);
    assert!(matches!(
        s.set_voxel(1, 3, 0, 0),
        Err(SurfaceError::OutOfRange { x: 3, .. })
    ));
    assert!(s.voxel(0, 2, 0).is_err());
    assert!(s.voxel(0, 0, 4).is_err());
    // A fill box poking past any axis is rejected before writing, and the
    // error reports the box as origin + extents, not as a coordinate
    assert_eq!(
        s.fill(1, 2, 0, 0, 2, 1, 1),
        Err(SurfaceError::BoxOutOfRange {
            x: 2,
            y: 0,
            z: 0,
            w: 2,
            h: 1,
            d: 1,
            width: 3,
            height: 2,
            depth: 4,
        })
    );
    assert!(matches!(
        s.fill(1, 0, 0, 3, 1, 1, 2),
        Err(SurfaceError::BoxOutOfRange { z: 3, d: 2, .. })
    ));
    // Nothing was written by the failed calls
    for z in 0..4 {
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(s.voxel(x, y, z).unwrap(), 0);
            }
        }
    }
}

#[test]
fn fill_assigns_only_the_box() {
    let mut s = surface(4, 3, 4);
    s.fill(5, 1, 0, 1, 2, 2, 2).unwrap();

    for z in 0..4 {
        for y in 0..3 {
            for x in 0..4 {
                let inside = (1..3).contains(&x) && (0..2).contains(&y) && (1..3).contains(&z);
                let expected = if inside { 5 } else { 0 };
                assert_eq!(s.voxel(x, y, z).unwrap(), expected, "at ({x}, {y}, {z})");
            }
        }
    }

    // A single set outside the box leaves the rest untouched
    s.set_voxel(7, 3, 2, 3).unwrap();
    assert_eq!(s.voxel(3, 2, 3).unwrap(), 7);
    assert_eq!(s.voxel(0, 0, 0).unwrap(), 0);
    assert_eq!(s.voxel(1, 0, 1).unwrap(), 5);
}

#[test]
fn mutations_set_the_dirty_flag() {
    let palette = isovox::VoxelPalette::new();
    let mut s = surface(3, 2, 3);

    s.update(&palette, true);
    assert!(!s.is_dirty());

    s.set_voxel(1, 0, 0, 0).unwrap();
    assert!(s.is_dirty());
    s.update(&palette, true);
    assert!(!s.is_dirty());

    s.fill(2, 0, 0, 0, 2, 1, 2).unwrap();
    assert!(s.is_dirty());
    s.update(&palette, true);
    assert!(!s.is_dirty());

    s.clear();
    assert!(s.is_dirty());
    for z in 0..3 {
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(s.voxel(x, y, z).unwrap(), 0);
            }
        }
    }
}
