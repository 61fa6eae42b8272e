/// Face-indexed color palette for voxel rendering.
/// A flat byte table keyed by (voxel id, face); colors are resolved once at
/// setup time so the rasterizer does no per-pixel shading work.

/// The four face slots of a palette entry.
///
/// `Top` is the dimmer variant used when the voxel behind on the view
/// diagonal occludes part of the top face; `Top2` is the full-brightness
/// unoccluded top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VoxelFace {
    Top = 0,
    Left = 1,
    Right = 2,
    Top2 = 3,
}

pub const FACE_COUNT: usize = 4;

/// Number of addressable voxel ids (full `u16` range).
pub const PALETTE_ENTRIES: usize = 1 << 16;

const CHANNELS: usize = 3;

/// A 16-bit palette: 65536 voxel ids x 4 faces x (r, g, b).
///
/// Voxel id 0 is reserved for empty/air; its `Top` entry doubles as the
/// background color used when clearing the pixel buffer. Entries never set
/// read as zero (black).
pub struct VoxelPalette {
    channels: Box<[u8]>,
}

impl VoxelPalette {
    pub fn new() -> Self {
        Self {
            channels: vec![0u8; PALETTE_ENTRIES * FACE_COUNT * CHANNELS].into_boxed_slice(),
        }
    }

    #[inline]
    const fn entry_index(voxel: u16, face: VoxelFace) -> usize {
        voxel as usize * FACE_COUNT * CHANNELS + face as usize * CHANNELS
    }

    #[inline]
    pub fn red(&self, voxel: u16, face: VoxelFace) -> u8 {
        self.channels[Self::entry_index(voxel, face)]
    }

    #[inline]
    pub fn green(&self, voxel: u16, face: VoxelFace) -> u8 {
        self.channels[Self::entry_index(voxel, face) + 1]
    }

    #[inline]
    pub fn blue(&self, voxel: u16, face: VoxelFace) -> u8 {
        self.channels[Self::entry_index(voxel, face) + 2]
    }

    /// All three channels of one face as `[r, g, b]`.
    #[inline]
    pub fn rgb(&self, voxel: u16, face: VoxelFace) -> [u8; 3] {
        let index = Self::entry_index(voxel, face);
        [
            self.channels[index],
            self.channels[index + 1],
            self.channels[index + 2],
        ]
    }

    /// Set one face from a packed 24-bit `0xRRGGBB` color.
    pub fn set_entry(&mut self, voxel: u16, face: VoxelFace, color: u32) {
        let index = Self::entry_index(voxel, face);
        self.channels[index] = ((color >> 16) & 0xff) as u8;
        self.channels[index + 1] = ((color >> 8) & 0xff) as u8;
        self.channels[index + 2] = (color & 0xff) as u8;
    }

    pub fn set_red(&mut self, voxel: u16, face: VoxelFace, r: u8) {
        self.channels[Self::entry_index(voxel, face)] = r;
    }

    pub fn set_green(&mut self, voxel: u16, face: VoxelFace, g: u8) {
        self.channels[Self::entry_index(voxel, face) + 1] = g;
    }

    pub fn set_blue(&mut self, voxel: u16, face: VoxelFace, b: u8) {
        self.channels[Self::entry_index(voxel, face) + 2] = b;
    }

    /// Derive all four faces of a voxel from one base color, baking the fixed
    /// overhead light into the table: `Top2` keeps the full color, `Left` is
    /// halved, `Right` is quartered, and the occluded `Top` variant sits at
    /// three quarters. Each channel floors once, after scaling.
    pub fn set_entry_shaded(&mut self, voxel: u16, color: u32) {
        self.set_entry(voxel, VoxelFace::Top2, color);

        let r = ((color >> 16) & 0xff) as u8;
        let g = ((color >> 8) & 0xff) as u8;
        let b = (color & 0xff) as u8;

        self.set_red(voxel, VoxelFace::Left, r / 2);
        self.set_green(voxel, VoxelFace::Left, g / 2);
        self.set_blue(voxel, VoxelFace::Left, b / 2);

        self.set_red(voxel, VoxelFace::Right, r / 4);
        self.set_green(voxel, VoxelFace::Right, g / 4);
        self.set_blue(voxel, VoxelFace::Right, b / 4);

        // Widen before the 3x scale so the quotient is floored once; r / 4 * 3
        // would truncate the quarter first and land up to 2 steps darker.
        self.set_red(voxel, VoxelFace::Top, (r as u16 * 3 / 4) as u8);
        self.set_green(voxel, VoxelFace::Top, (g as u16 * 3 / 4) as u8);
        self.set_blue(voxel, VoxelFace::Top, (b as u16 * 3 / 4) as u8);
    }
}

impl Default for VoxelPalette {
    fn default() -> Self {
        Self::new()
    }
}
