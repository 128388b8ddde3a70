//! Summary record printed for an MD2 file.

use std::fmt;

/// The counts of an MD2 header that tools usually care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Md2Summary {
    /// Skin dimensions as `(width, height)`.
    pub skin: (i32, i32),
    pub num_skins: i32,
    pub num_xyz: i32,
    pub num_st: i32,
    pub num_tris: i32,
    pub num_frames: i32,
}

impl fmt::Display for Md2Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{skin: {}x{}, num_skins: {}, num_xyz: {}, num_st: {}, num_tris: {}, num_frames: {}}}",
            self.skin.0,
            self.skin.1,
            self.num_skins,
            self.num_xyz,
            self.num_st,
            self.num_tris,
            self.num_frames
        )
    }
}
